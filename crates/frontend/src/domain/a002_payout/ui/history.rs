use leptos::prelude::*;
use thaw::*;

use super::request_form::PayoutRequestPanel;
use super::state::PayoutsState;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::{format_datetime, format_optional_date};
use crate::shared::number_format::format_money;

#[component]
pub fn PayoutHistoryTab(state: PayoutsState) -> impl IntoView {
    view! {
        <div class="payout-history">
            {(!state.read_only()).then(|| view! { <PayoutRequestPanel state=state /> })}
            <h3>"Payout history"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=150.0>"Requested"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Amount"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Method"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Processed"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Note"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = state.payouts.get();
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>"No payouts yet"</TableCellLayout></TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|p| {
                                let note = p.admin_note.clone().or(p.note.clone()).unwrap_or_default();
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{format_datetime(&p.requested_at)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_money(p.amount)}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <StatusBadge status=p.status.as_str() label=p.status.label() />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {p.payment_method_label.clone().unwrap_or_else(|| "-".to_string())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_optional_date(p.processed_at.as_deref())}</TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout truncate=true>{note}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
