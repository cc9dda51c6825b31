use leptos::prelude::*;

/// Small status pill
#[component]
pub fn Badge(
    /// "success", "warning", "error" or "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! {
        <span class=variant_class>
            {children()}
        </span>
    }
}
