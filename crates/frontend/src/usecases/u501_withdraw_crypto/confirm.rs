use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

use crate::routes::app_route::AppRoute;
use crate::routes::navigator::Navigator;
use crate::shared::components::PageHeader;

/// Landing page after a withdrawal was accepted
#[component]
pub fn ConfirmOperationPage(
    navigator: Rc<dyn Navigator>,
    #[prop(into)] operation_id: String,
) -> impl IntoView {
    let navigator = StoredValue::new_local(navigator);

    view! {
        <div class="page page--narrow confirm-operation">
            <PageHeader title="Confirm withdrawal".to_string() />
            <MessageBar intent=MessageBarIntent::Success>
                "Your withdrawal request was accepted. Follow the confirmation link we sent you to complete it."
            </MessageBar>
            <p class="confirm-operation__id">
                "Operation: " <code>{operation_id}</code>
            </p>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| navigator.with_value(|n| n.replace(AppRoute::Assets))
            >
                "Back to assets"
            </Button>
        </div>
    }
}
