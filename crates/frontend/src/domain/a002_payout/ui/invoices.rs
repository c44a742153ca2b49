use leptos::prelude::*;
use thaw::*;

use super::state::PayoutsState;
use crate::shared::components::StatusBadge;
use crate::shared::date_utils::{format_optional_date, format_period};
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;

#[component]
pub fn InvoicesTab(state: PayoutsState) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell min_width=140.0>"Invoice"</TableHeaderCell>
                    <TableHeaderCell min_width=200.0>"Period"</TableHeaderCell>
                    <TableHeaderCell min_width=110.0>"Amount"</TableHeaderCell>
                    <TableHeaderCell min_width=110.0>"Commission"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                    <TableHeaderCell min_width=110.0>"Issued"</TableHeaderCell>
                    <TableHeaderCell min_width=80.0>""</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || state
                    .invoices
                    .get()
                    .into_iter()
                    .map(|inv| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{inv.invoice_number.clone()}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{format_period(&inv.period_start, &inv.period_end)}</TableCellLayout>
                            </TableCell>
                            <TableCell><TableCellLayout>{format_money(inv.amount)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{format_money(inv.commission)}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout><StatusBadge status=inv.status.clone() /></TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{format_optional_date(inv.issued_at.as_deref())}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    {inv.download_url.clone().map(|url| view! {
                                        <a href=url target="_blank" rel="noopener" title="Download">
                                            {icon("download")}
                                        </a>
                                    })}
                                </TableCellLayout>
                            </TableCell>
                        </TableRow>
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
}
