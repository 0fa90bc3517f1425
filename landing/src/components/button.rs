//! Call-to-action button with three style variants

use std::str::FromStr;

use leptos::prelude::*;

use super::layout::join_classes;
use crate::error::LandingError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub const fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = LandingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "primary" => Ok(ButtonVariant::Primary),
            "secondary" => Ok(ButtonVariant::Secondary),
            "outline" => Ok(ButtonVariant::Outline),
            other => Err(LandingError::UnknownVariant(other.to_string())),
        }
    }
}

/// Full class attribute: `btn <variant> [extra]`
pub fn button_class(variant: ButtonVariant, extra: &str) -> String {
    join_classes(&format!("btn {}", variant.class()), extra)
}

#[component]
pub fn Button(
    /// Defaults to [`ButtonVariant::Primary`]
    #[prop(optional)]
    variant: ButtonVariant,
    /// Extra classes appended after the variant class
    #[prop(default = "")]
    class: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(variant, class)
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn omitted_variant_is_primary() {
        let html = view! { <Button>"Solicitar Demo"</Button> }.to_html();
        assert!(html.contains(r#"class="btn btn-primary""#));
    }

    #[test]
    fn outline_variant_renders_outline_class() {
        let html = view! { <Button variant=ButtonVariant::Outline>"Conhecer os Testes"</Button> }
            .to_html();
        assert!(html.contains("btn-outline"));
        assert!(!html.contains("btn-primary"));
    }

    #[test]
    fn extra_classes_follow_variant() {
        assert_eq!(
            button_class(ButtonVariant::Secondary, "btn-lg"),
            "btn btn-secondary btn-lg"
        );
        assert_eq!(button_class(ButtonVariant::Primary, ""), "btn btn-primary");
    }

    #[test]
    fn variants_parse_from_names() {
        for variant in [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::Outline] {
            assert_eq!(variant.name().parse::<ButtonVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn unknown_variant_name_is_an_error() {
        let err = "ghost".parse::<ButtonVariant>().unwrap_err();
        assert!(matches!(err, LandingError::UnknownVariant(name) if name == "ghost"));
    }
}
