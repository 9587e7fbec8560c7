use contracts::domain::menu_item::MenuItem;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::format::format_naira;
use crate::shared::icons::icon;

/// Deterministic hue for a name, so items without artwork get a stable
/// placeholder color across renders and sessions.
pub fn name_hue(name: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in name.chars() {
        hash = (ch as i32).wrapping_add((hash << 5).wrapping_sub(hash));
    }
    (hash.unsigned_abs()) % 360
}

/// Up to two initials for the placeholder artwork.
pub fn name_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

pub fn placeholder_style(name: &str) -> String {
    format!("background-color: hsl({}, 70%, 45%)", name_hue(name))
}

/// Image area of a card: the item's artwork, or generated initials.
#[component]
pub fn ItemArtwork(name: String, image: Option<String>) -> impl IntoView {
    match image {
        Some(url) => view! {
            <img class="menu-card__image" src={url} alt={name} />
        }
        .into_any(),
        None => view! {
            <div class="menu-card__placeholder" style={placeholder_style(&name)}>
                {name_initials(&name)}
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn MenuItemCard(item: MenuItem) -> impl IntoView {
    let available = item.is_available;
    let detail_href = format!("/menu/item/{}", item.id);
    let price = format_naira(item.price);
    let image = item.primary_image().map(str::to_string);
    let show_spice = item.spicy_level > 1;
    let show_prep = item.preparation_time > 0;

    view! {
        <div class="menu-card" class:menu-card--unavailable=!available>
            <div class="menu-card__media">
                <ItemArtwork name={item.name.clone()} image={image} />
                <Show when=move || !available>
                    <div class="menu-card__overlay">
                        <span class="badge badge--danger">"Out of Stock"</span>
                    </div>
                </Show>
            </div>

            <div class="menu-card__body">
                <h3 class="menu-card__title">{item.name.clone()}</h3>
                {(!item.description.is_empty()).then(|| view! {
                    <p class="menu-card__description">{item.description.clone()}</p>
                })}

                {(show_prep || show_spice).then(|| view! {
                    <div class="menu-card__badges">
                        {show_prep.then(|| view! {
                            <span class="badge badge--info">
                                {icon("clock")}
                                {format!("{}m", item.preparation_time)}
                            </span>
                        })}
                        {show_spice.then(|| view! {
                            <span class="badge badge--spice">
                                {icon("flame")}
                                {format!("Lv{}", item.spicy_level)}
                            </span>
                        })}
                    </div>
                })}

                <div class="menu-card__footer">
                    <span class="menu-card__price">{price}</span>
                    {if available {
                        view! {
                            <A href={detail_href} attr:class="button button--primary button--small">
                                "View"
                            </A>
                        }
                        .into_any()
                    } else {
                        view! {
                            <span class="button button--disabled button--small">"Unavailable"</span>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_is_stable_and_bounded() {
        assert_eq!(name_hue("Jollof Rice"), name_hue("Jollof Rice"));
        for name in ["a", "Egusi Soup", "Chapman", ""] {
            assert!(name_hue(name) < 360);
        }
    }

    #[test]
    fn different_names_usually_differ() {
        assert_ne!(name_hue("Jollof Rice"), name_hue("Pepper Soup"));
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(name_initials("Jollof Rice"), "JR");
        assert_eq!(name_initials("Suya"), "S");
        assert_eq!(name_initials("Peppered Goat Meat"), "PG");
        assert_eq!(name_initials(""), "");
    }

    #[test]
    fn initials_are_uppercased() {
        assert_eq!(name_initials("moi moi"), "MM");
    }
}
