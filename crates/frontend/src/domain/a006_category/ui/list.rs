use contracts::domain::a006_category::aggregate::{tree_order, Category, CategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::editor::CategoryEditor;
use crate::domain::a006_category::api;
use crate::shared::components::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::modal::confirm;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

/// Category tree with indentation by depth.
#[component]
pub fn CategoryList() -> impl IntoView {
    let toast = use_toast();
    let (items, set_items) = signal::<Vec<Category>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing = RwSignal::new(None::<CategoryDto>);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let rows = Memo::new(move |_| items.with(|all| tree_order(all)));

    let handle_delete = move |category: Category| {
        let has_children = items.with_untracked(|all| {
            all.iter().any(|c| c.parent_id.as_deref() == Some(category.id.as_str()))
        });
        let message = if has_children {
            format!(
                "Delete category \"{}\"? Its subcategories will move to the top level.",
                category.name
            )
        } else {
            format!("Delete category \"{}\"?", category.name)
        };
        if !confirm(&message) {
            return;
        }
        spawn_local(async move {
            match api::delete_category(&category.id).await {
                Ok(()) => {
                    toast.success("Category deleted");
                    fetch();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <PageFrame page_id="categories--list" category=PAGE_CAT_LIST>
            <PageHeader title="Categories" subtitle="Product catalogue structure">
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(CategoryDto { is_active: true, ..Default::default() }))
                    >
                        {icon("plus")}
                        " New category"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=240.0>"Name"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Slug"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Products"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"State"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || rows
                        .get()
                        .into_iter()
                        .map(|(depth, category)| {
                            let for_edit = CategoryDto::from(&category);
                            let for_delete = category.clone();
                            let state = if category.is_active { "active" } else { "inactive" };
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span style=format!("padding-left: {}px;", depth * 20)>
                                                {(depth > 0).then_some("└ ")}
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |e| {
                                                        e.prevent_default();
                                                        editing.set(Some(for_edit.clone()));
                                                    }
                                                >
                                                    {category.name.clone()}
                                                </a>
                                            </span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout truncate=true>{category.slug.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{category.product_count}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <StatusBadge status=state />
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| handle_delete(for_delete.clone())
                                            >
                                                {icon("delete")}
                                            </Button>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>

            {move || editing.get().map(|dto| view! {
                <CategoryEditor
                    dto=dto
                    existing=items.get_untracked()
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
