use contracts::domain::a006_category::aggregate::{Category, CategoryDto};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_category::api;
use crate::shared::components::{field_error, FormField, FormTextArea};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

/// Create/edit form. `existing` is the full list, used for the parent
/// select and the slug uniqueness check.
#[component]
pub fn CategoryEditor(
    dto: CategoryDto,
    existing: Vec<Category>,
    on_saved: Callback<Category>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let heading = if dto.is_edit() { "Edit category" } else { "New category" };
    let own_id = dto.id.clone();
    let draft = RwSignal::new(dto.clone());
    let name = RwSignal::new(dto.name);
    let slug = RwSignal::new(dto.slug);
    let description = RwSignal::new(dto.description);
    let parent = RwSignal::new(dto.parent_id.unwrap_or_default());
    let is_active = RwSignal::new(dto.is_active);
    let errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);
    let existing = StoredValue::new(existing);

    // Typing a name keeps an untouched slug in step with it.
    Effect::new(move |_| {
        let value = name.get();
        let next = draft.with_untracked(|d| {
            let mut d = d.clone();
            d.slug = slug.get_untracked();
            d.set_name(value);
            d
        });
        if next.slug != slug.get_untracked() {
            slug.set(next.slug.clone());
        }
        draft.set(next);
    });

    let snapshot = move || CategoryDto {
        id: draft.with_untracked(|d| d.id.clone()),
        name: name.get_untracked().trim().to_string(),
        slug: slug.get_untracked().trim().to_string(),
        description: description.get_untracked().trim().to_string(),
        parent_id: Some(parent.get_untracked()).filter(|p| !p.is_empty()),
        is_active: is_active.get_untracked(),
    };

    let save = move || {
        let dto = snapshot();
        let found = existing.with_value(|all| dto.validate(all));
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        saving.set(true);
        spawn_local(async move {
            match api::save_category(&dto).await {
                Ok(category) => {
                    toast.success("Category saved");
                    on_saved.run(category);
                }
                Err(e) => toast.error(e),
            }
            saving.set(false);
        });
    };

    let footer: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <Space>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>"Cancel"</Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=move |_| save()
                >
                    "Save"
                </Button>
            </Space>
        }
        .into_any()
    });

    let parent_options = existing.with_value(|all| {
        all.iter()
            .filter(|c| Some(&c.id) != own_id.as_ref())
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect::<Vec<_>>()
    });

    view! {
        <Modal title=heading.to_string() on_close=on_close footer=footer>
            <FormField label="Name" value=name error=field_error(errors, "name") required=true />
            <FormField
                label="Slug"
                value=slug
                error=field_error(errors, "slug")
                placeholder="generated from the name"
                required=true
            />
            <FormTextArea label="Description" value=description error=field_error(errors, "description") rows=3 />
            <div class="form__group">
                <label class="form__label">"Parent"</label>
                <Select value=parent>
                    <option value="">"None (top level)"</option>
                    {parent_options
                        .into_iter()
                        .map(|(id, label)| view! { <option value=id>{label}</option> })
                        .collect_view()}
                </Select>
                {move || field_error(errors, "parent_id")
                    .get()
                    .map(|e| view! { <span class="form__error">{e}</span> })}
            </div>
            <Checkbox checked=is_active label="Active" />
        </Modal>
    }
}
