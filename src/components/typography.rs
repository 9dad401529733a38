//! Text rendered with a theme type variant.

use leptos::prelude::*;

use crate::core::css::{no_wrap_class, paragraph_class, typography_class};
use crate::core::theme::{TextTag, Variant};

/// Text node styled by the generated `djchat-typography-*` classes.
///
/// # Props
/// - `variant`: type scale entry
/// - `tag`: element override (defaults to the variant's element, or `<p>`
///   for paragraphs)
/// - `no_wrap`: truncate with an ellipsis instead of wrapping
/// - `paragraph`: bottom margin for stacked paragraphs
#[component]
pub fn Typography(
    variant: Variant,
    #[prop(optional)] tag: Option<TextTag>,
    #[prop(optional)] no_wrap: bool,
    #[prop(optional)] paragraph: bool,
    #[prop(optional, into)] style: String,
    children: Children,
) -> impl IntoView {
    let mut classes = vec![typography_class(variant)];
    if no_wrap {
        classes.push(no_wrap_class());
    }
    if paragraph {
        classes.push(paragraph_class());
    }
    let class = classes.join(" ");

    let tag = tag.unwrap_or(if paragraph {
        TextTag::P
    } else {
        variant.default_tag()
    });

    match tag {
        TextTag::H1 => view! { <h1 class=class style=style>{children()}</h1> }.into_any(),
        TextTag::H2 => view! { <h2 class=class style=style>{children()}</h2> }.into_any(),
        TextTag::H3 => view! { <h3 class=class style=style>{children()}</h3> }.into_any(),
        TextTag::H4 => view! { <h4 class=class style=style>{children()}</h4> }.into_any(),
        TextTag::H5 => view! { <h5 class=class style=style>{children()}</h5> }.into_any(),
        TextTag::H6 => view! { <h6 class=class style=style>{children()}</h6> }.into_any(),
        TextTag::P => view! { <p class=class style=style>{children()}</p> }.into_any(),
        TextTag::Span => view! { <span class=class style=style>{children()}</span> }.into_any(),
        TextTag::Div => view! { <div class=class style=style>{children()}</div> }.into_any(),
    }
}
