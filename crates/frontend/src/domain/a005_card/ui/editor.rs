use contracts::domain::a005_card::aggregate::{Card, CardDto};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_card::api;
use crate::shared::components::{field_error, FormField, FormTextArea};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

#[component]
pub fn CardEditor(dto: CardDto, on_saved: Callback<Card>, on_close: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let id = StoredValue::new(dto.id.clone());
    let title = RwSignal::new(dto.title);
    let description = RwSignal::new(dto.description);
    let image_url = RwSignal::new(dto.image_url);
    let link_url = RwSignal::new(dto.link_url);
    let button_text = RwSignal::new(dto.button_text);
    let position = RwSignal::new(dto.position.to_string());
    let is_active = RwSignal::new(dto.is_active);
    let errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);

    let snapshot = move || CardDto {
        id: id.get_value(),
        title: title.get_untracked().trim().to_string(),
        description: description.get_untracked().trim().to_string(),
        image_url: image_url.get_untracked().trim().to_string(),
        link_url: link_url.get_untracked().trim().to_string(),
        button_text: button_text.get_untracked().trim().to_string(),
        position: position.get_untracked().trim().parse().unwrap_or(0),
        is_active: is_active.get_untracked(),
    };

    let save = move || {
        let dto = snapshot();
        let found = dto.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        saving.set(true);
        spawn_local(async move {
            match api::save_card(&dto).await {
                Ok(card) => {
                    toast.success("Card saved");
                    on_saved.run(card);
                }
                Err(e) => toast.error(e),
            }
            saving.set(false);
        });
    };

    let heading = if dto.id.is_some() { "Edit card" } else { "New card" };
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

    view! {
        <Modal title=heading.to_string() on_close=on_close footer=footer>
            <FormField label="Title" value=title error=field_error(errors, "title") required=true />
            <FormTextArea label="Description" value=description error=field_error(errors, "description") rows=3 />
            <FormField label="Image URL" value=image_url error=field_error(errors, "image_url") input_type="url" />
            {move || {
                let src = image_url.get();
                (!src.trim().is_empty()).then(|| view! { <img class="card-preview" src=src alt="Preview" /> })
            }}
            <div class="form__row">
                <FormField label="Link" value=link_url error=field_error(errors, "link_url") input_type="url" />
                <FormField label="Button text" value=button_text error=field_error(errors, "button_text") />
            </div>
            <FormField label="Position" value=position error=Signal::derive(|| None::<String>) input_type="number" />
            <Checkbox checked=is_active label="Shown on the storefront" />
        </Modal>
    }
}
