use contracts::domain::a001_asset::{Asset, AssetCategory};
use contracts::shared::money::format_amount;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

use crate::root_store::RootStore;
use crate::routes::app_route::AppRoute;
use crate::routes::navigator::Navigator;
use crate::shared::components::PageHeader;

const UNCATEGORIZED: &str = "Other";

#[derive(Clone, Debug, PartialEq)]
pub struct AssetRow {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub balance: String,
    /// Available payment methods, comma separated
    pub payment_methods: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssetGroup {
    pub title: String,
    pub rows: Vec<AssetRow>,
}

/// Groups assets by category in category order; uncategorized assets and
/// assets of unknown categories go last.
pub fn group_assets(
    assets: &[Asset],
    categories: &[AssetCategory],
    balance_of: impl Fn(&str) -> f64,
    payment_methods_of: impl Fn(&str) -> Vec<String>,
) -> Vec<AssetGroup> {
    let row = |a: &Asset| AssetRow {
        id: a.id.clone(),
        name: a.name.clone(),
        ticker: a.ticker().to_string(),
        balance: format_amount(balance_of(&a.id), a.accuracy),
        payment_methods: payment_methods_of(&a.id).join(", "),
    };

    let mut groups: Vec<AssetGroup> = categories
        .iter()
        .map(|c| AssetGroup {
            title: c.name.clone(),
            rows: assets
                .iter()
                .filter(|a| a.category_id.as_deref() == Some(c.id.as_str()))
                .map(row)
                .collect(),
        })
        .filter(|g| !g.rows.is_empty())
        .collect();

    let rest: Vec<AssetRow> = assets
        .iter()
        .filter(|a| {
            a.category_id
                .as_deref()
                .map_or(true, |id| !categories.iter().any(|c| c.id == id))
        })
        .map(row)
        .collect();
    if !rest.is_empty() {
        groups.push(AssetGroup {
            title: UNCATEGORIZED.to_string(),
            rows: rest,
        });
    }
    groups
}

#[component]
#[allow(non_snake_case)]
pub fn AssetList(root: Rc<RootStore>, navigator: Rc<dyn Navigator>) -> impl IntoView {
    let assets = root.assets();
    let wallets = root.wallets();

    {
        let assets = assets.clone();
        let wallets = wallets.clone();
        leptos::task::spawn_local(async move {
            assets.fetch_all().await;
            let _ = wallets.fetch_wallets().await;
        });
    }

    let assets = StoredValue::new_local(assets);
    let wallets = StoredValue::new_local(wallets);
    let navigator = StoredValue::new_local(navigator);

    let groups = move || {
        let wallets = wallets.get_value();
        let assets = assets.get_value();
        group_assets(
            &assets.assets(),
            &assets.categories(),
            |id| wallets.last_known_balance_of(id).unwrap_or(0.0),
            |id| assets.payment_methods_for(id),
        )
    };
    let error = move || assets.with_value(|a| a.error());
    let is_loading = move || assets.with_value(|a| a.is_loading());

    view! {
        <div class="page">
            <PageHeader title="Assets".to_string() />

            {move || error().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}
            <Show when=is_loading>
                <Spinner label="Loading assets..." />
            </Show>

            {move || groups().into_iter().map(|group| view! {
                <section class="asset-group">
                    <h2 class="asset-group__title">{group.title}</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Asset"</th>
                                <th class="table__cell--right">"Balance"</th>
                                <th>"Payment methods"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {group.rows.into_iter().map(|row| {
                                let asset_id = row.id.clone();
                                view! {
                                    <tr>
                                        <td>{row.name} " " <span class="asset__ticker">{row.ticker}</span></td>
                                        <td class="table__cell--right">{row.balance}</td>
                                        <td class="asset__methods">{row.payment_methods}</td>
                                        <td class="table__cell--right">
                                            <Button
                                                size=ButtonSize::Small
                                                on_click=move |_| {
                                                    let route = AppRoute::WithdrawCrypto {
                                                        asset_id: asset_id.clone(),
                                                    };
                                                    navigator.with_value(|n| n.push(route));
                                                }
                                            >
                                                "Withdraw"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </section>
            }).collect_view()}
        </div>
    }
}
