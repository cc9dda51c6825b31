use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

use super::amount_input::AmountInput;
use super::validation::WithdrawField;
use super::view_model::WithdrawCryptoViewModel;
use crate::root_store::RootStore;
use crate::routes::app_route::ROUTE_SECURITY;
use crate::routes::navigator::Navigator;
use crate::shared::components::ui::{FieldError, Input};
use crate::shared::components::PageHeader;

#[component]
pub fn WithdrawCryptoPage(
    root: Rc<RootStore>,
    navigator: Rc<dyn Navigator>,
    #[prop(into)] asset_id: String,
) -> impl IntoView {
    let vm = WithdrawCryptoViewModel::new(&root, &asset_id, navigator);
    vm.init();

    let title = Signal::derive(move || format!("Withdraw {}", vm.asset_name()));
    let subtitle = Signal::derive(move || {
        Some(match vm.balance_text() {
            Some(balance) => format!("Available balance: {} {}", balance, vm.asset_name()),
            None if vm.is_balance_loading() => "Loading balance...".to_string(),
            None => "Balance is unavailable".to_string(),
        })
    });

    view! {
        <div class="page page--narrow withdraw-crypto">
            <PageHeader title=title subtitle=subtitle />

            <Show when=move || vm.needs_2fa()>
                <div class="withdraw-crypto__banner">
                    <MessageBar intent=MessageBarIntent::Warning>
                        <span>"Withdrawals require Two-Factor Authentication. "</span>
                        <a
                            href=ROUTE_SECURITY
                            on:click=move |ev| {
                                ev.prevent_default();
                                vm.open_security();
                            }
                        >
                            "Enable 2FA"
                        </a>
                    </MessageBar>
                </div>
            </Show>

            {move || vm.asset_description().map(|text| view! {
                <p class="withdraw-crypto__description">{text}</p>
            })}

            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <div class="form__group">
                    <label class="form__label" for="withdraw-amount">"Amount"</label>
                    <AmountInput
                        name="withdraw-amount"
                        value=vm.amount_text
                        on_change=Callback::new(move |masked| vm.set_amount(masked))
                        decimal_limit=Signal::derive(move || vm.accuracy())
                        disabled=Signal::derive(move || Some(vm.is_submitting()))
                    />
                    <FieldError error=Signal::derive(move || vm.field_error(WithdrawField::Amount)) />
                    <Show when=move || vm.has_amount()>
                        {move || match vm.fee_lines() {
                            Some((fee, total)) => view! {
                                <div class="withdraw-crypto__fee">
                                    <div>"Fee: " {fee}</div>
                                    <div>"Total: " <strong>{total}</strong></div>
                                </div>
                            }
                            .into_any(),
                            None => view! {
                                <div class="withdraw-crypto__fee withdraw-crypto__fee--unavailable">
                                    {vm.fee_error()
                                        .map(|e| format!("Fee is unavailable: {}", e))
                                        .unwrap_or_else(|| "Calculating fee...".to_string())}
                                </div>
                            }
                            .into_any(),
                        }}
                    </Show>
                </div>

                <Input
                    id="withdraw-base-address"
                    label=Signal::derive(move || Some(vm.base_address_title()))
                    value=Signal::derive(move || vm.base_address())
                    on_input=Callback::new(move |v| vm.set_base_address(v))
                    error=Signal::derive(move || vm.field_error(WithdrawField::BaseAddress))
                    disabled=Signal::derive(move || Some(vm.is_submitting()))
                />

                <Show when=move || vm.is_extension_mandatory()>
                    <Input
                        id="withdraw-address-extension"
                        label=Signal::derive(move || Some(vm.address_extension_title()))
                        value=Signal::derive(move || vm.address_extension())
                        on_input=Callback::new(move |v| vm.set_address_extension(v))
                        error=Signal::derive(move || vm.field_error(WithdrawField::AddressExtension))
                        disabled=Signal::derive(move || Some(vm.is_submitting()))
                    />
                </Show>

                {move || vm.form_error.get().map(|message| view! {
                    <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
                })}

                <div class="form__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=move || !vm.can_submit()
                        loading=move || vm.is_submitting()
                    >
                        "Submit"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| vm.cancel()
                    >
                        "Cancel and go back"
                    </Button>
                </div>
            </form>
        </div>
    }
}
