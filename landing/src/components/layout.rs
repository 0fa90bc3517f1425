//! Layout primitives: section band, centered container, badge, heading

use leptos::prelude::*;

/// Vertical band of the page. `id` makes it a scroll target.
#[component]
pub fn Section(
    #[prop(optional)] id: Option<&'static str>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = join_classes("section", class);
    view! {
        <section id=id class=class>
            {children()}
        </section>
    }
}

/// Max-width wrapper with horizontal padding
#[component]
pub fn Container(#[prop(default = "")] class: &'static str, children: Children) -> impl IntoView {
    let class = join_classes("container", class);
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! { <span class="badge">{children()}</span> }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Center,
    Left,
}

impl Align {
    pub const fn class(self) -> &'static str {
        match self {
            Align::Center => "section-heading align-center",
            Align::Left => "section-heading align-left",
        }
    }
}

/// Section title with an optional lead paragraph
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] align: Align,
) -> impl IntoView {
    view! {
        <div class=align.class()>
            <h2 class="section-title">{title}</h2>
            {subtitle.map(|text| view! { <p class="section-subtitle">{text}</p> })}
        </div>
    }
}

/// `base` followed by `extra` when non-empty
pub(crate) fn join_classes(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn join_classes_skips_empty_extra() {
        assert_eq!(join_classes("section", ""), "section");
        assert_eq!(join_classes("section", "  "), "section");
        assert_eq!(join_classes("section", "section-muted"), "section section-muted");
    }

    #[test]
    fn heading_defaults_to_center_without_subtitle() {
        let html = view! { <SectionHeading title="Uso na Rotina Clínica" /> }.to_html();
        assert!(html.contains("align-center"));
        assert!(html.contains("Uso na Rotina Clínica"));
        assert!(!html.contains("section-subtitle"));
    }

    #[test]
    fn heading_left_with_subtitle() {
        let html = view! {
            <SectionHeading title="T" subtitle="Sub" align=Align::Left />
        }
        .to_html();
        assert!(html.contains("align-left"));
        assert!(html.contains(r#"class="section-subtitle""#));
        assert!(html.contains("Sub"));
    }

    #[test]
    fn section_renders_id_only_when_given() {
        let with_id = view! { <Section id="testes">"x"</Section> }.to_html();
        assert!(with_id.contains(r#"id="testes""#));

        let without = view! { <Section class="section-muted">"x"</Section> }.to_html();
        assert!(!without.contains("id="));
        assert!(without.contains(r#"class="section section-muted""#));
    }
}
