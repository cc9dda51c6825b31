use contracts::domain::a001_asset::aggregate::DEFAULT_ACCURACY;
use contracts::domain::a002_wallet::{Wallet, WalletType};
use contracts::shared::money::format_amount;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

use crate::root_store::RootStore;
use crate::shared::components::ui::Badge;
use crate::shared::components::PageHeader;

#[derive(Clone, Debug, PartialEq)]
pub struct BalanceRow {
    pub asset: String,
    pub balance: String,
    pub reserved: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WalletCard {
    pub name: String,
    pub is_trading: bool,
    pub rows: Vec<BalanceRow>,
}

impl WalletCard {
    /// `accuracy_of` gives the rounding of each asset's amounts
    pub fn build(wallet: &Wallet, accuracy_of: impl Fn(&str) -> u32) -> Self {
        let mut rows: Vec<BalanceRow> = wallet
            .balances
            .iter()
            .map(|b| {
                let accuracy = accuracy_of(&b.asset_id);
                BalanceRow {
                    asset: b.asset_id.clone(),
                    balance: format_amount(b.balance, accuracy),
                    reserved: format_amount(b.reserved, accuracy),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.asset.cmp(&b.asset));

        Self {
            name: wallet.name.clone(),
            is_trading: wallet.wallet_type == WalletType::Trading,
            rows,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn WalletList(root: Rc<RootStore>) -> impl IntoView {
    let wallets = root.wallets();
    let assets = root.assets();

    {
        let wallets = wallets.clone();
        leptos::task::spawn_local(async move {
            let _ = wallets.fetch_wallets().await;
        });
    }

    let wallets = StoredValue::new_local(wallets);
    let assets = StoredValue::new_local(assets);

    let cards = move || {
        let assets = assets.get_value();
        let accuracy_of = |id: &str| {
            assets
                .get_by_id(id)
                .map(|a| a.accuracy)
                .unwrap_or(DEFAULT_ACCURACY)
        };
        wallets
            .get_value()
            .wallets()
            .iter()
            .map(|w| WalletCard::build(w, accuracy_of))
            .collect::<Vec<_>>()
    };
    let error = move || wallets.with_value(|w| w.error());

    view! {
        <div class="page">
            <PageHeader title="Wallets".to_string() />

            {move || error().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            {move || cards().into_iter().map(|card| view! {
                <section class="wallet-card">
                    <h2 class="wallet-card__title">
                        {card.name}
                        " "
                        {if card.is_trading {
                            view! { <Badge variant="success">"Trading"</Badge> }.into_any()
                        } else {
                            view! { <Badge>"API"</Badge> }.into_any()
                        }}
                    </h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Asset"</th>
                                <th class="table__cell--right">"Balance"</th>
                                <th class="table__cell--right">"Reserved"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {card.rows.into_iter().map(|row| view! {
                                <tr>
                                    <td>{row.asset}</td>
                                    <td class="table__cell--right">{row.balance}</td>
                                    <td class="table__cell--right">{row.reserved}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </section>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_wallet::Balance;

    #[test]
    fn test_card_rounds_per_asset_and_sorts() {
        let wallet = Wallet {
            id: "w-1".to_string(),
            name: "Main".to_string(),
            wallet_type: WalletType::Trading,
            balances: vec![
                Balance {
                    asset_id: "USD".to_string(),
                    balance: 10.456,
                    reserved: 0.0,
                },
                Balance {
                    asset_id: "BTC".to_string(),
                    balance: 0.123456789,
                    reserved: 0.1,
                },
            ],
        };

        let card = WalletCard::build(&wallet, |id| if id == "USD" { 2 } else { 8 });

        assert!(card.is_trading);
        assert_eq!(card.rows[0].asset, "BTC");
        assert_eq!(card.rows[0].balance, "0.12345679");
        assert_eq!(card.rows[1].balance, "10.46");
    }
}
