//! Storefront promo cards.

use contracts::domain::a005_card::aggregate::{sort_cards, Card, CardDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::editor::CardEditor;
use crate::domain::a005_card::api;
use crate::shared::components::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::modal::confirm;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

#[component]
pub fn CardList() -> impl IntoView {
    let toast = use_toast();
    let (items, set_items) = signal::<Vec<Card>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(None::<CardDto>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_cards().await {
                Ok(mut v) => {
                    sort_cards(&mut v);
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    fetch();

    let handle_create_new = move || {
        let next_position = items.with(|cards| cards.iter().map(|c| c.position + 1).max().unwrap_or(0));
        editing.set(Some(CardDto::new_card(next_position)));
    };

    let toggle_active = move |card: Card| {
        let mut dto = CardDto::from(&card);
        dto.is_active = !dto.is_active;
        spawn_local(async move {
            match api::save_card(&dto).await {
                Ok(saved) => set_items.update(|cards| {
                    if let Some(c) = cards.iter_mut().find(|c| c.id == saved.id) {
                        *c = saved;
                    }
                }),
                Err(e) => toast.error(e),
            }
        });
    };

    let handle_delete = move |card: Card| {
        if !confirm(&format!("Delete card \"{}\"?", card.title)) {
            return;
        }
        spawn_local(async move {
            match api::delete_card(&card.id).await {
                Ok(()) => {
                    set_items.update(|cards| cards.retain(|c| c.id != card.id));
                    toast.success("Card deleted");
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <PageFrame page_id="cards--list" category=PAGE_CAT_LIST>
            <PageHeader title="Cards" subtitle="Promotional cards on the storefront home page">
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                        {icon("plus")}
                        " New card"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=60.0>"#"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Image"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Title"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Link"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"State"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || items
                        .get()
                        .into_iter()
                        .map(|card| {
                            let for_edit = CardDto::from(&card);
                            let for_toggle = card.clone();
                            let for_delete = card.clone();
                            let state = if card.is_active { "active" } else { "inactive" };
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{card.position}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {card.image_url.clone().map(|src| view! {
                                                <img class="card-thumb" src=src alt="" />
                                            })}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <a
                                                href="#"
                                                class="table__link"
                                                on:click=move |e| {
                                                    e.prevent_default();
                                                    editing.set(Some(for_edit.clone()));
                                                }
                                            >
                                                {card.title.clone()}
                                            </a>
                                            <div class="text-muted">{card.description.clone().unwrap_or_default()}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {card.link_url.clone().unwrap_or_else(|| "-".to_string())}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <StatusBadge status=state />
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Space>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| toggle_active(for_toggle.clone())
                                                >
                                                    {if card.is_active { "Hide" } else { "Show" }}
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| handle_delete(for_delete.clone())
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </Space>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>

            {move || editing.get().map(|dto| view! {
                <CardEditor
                    dto=dto
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        fetch();
                    })
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </PageFrame>
    }
}
