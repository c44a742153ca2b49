//! Session tokens persisted in `localStorage` so a reload keeps the user signed in.

use web_sys::{window, Storage};

#[derive(Debug, Clone, Copy)]
enum Slot {
    Access,
    Refresh,
}

impl Slot {
    fn key(self) -> &'static str {
        match self {
            Slot::Access => "seller_admin.access_token",
            Slot::Refresh => "seller_admin.refresh_token",
        }
    }
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

fn read(slot: Slot) -> Option<String> {
    local_storage()?
        .get_item(slot.key())
        .ok()?
        .filter(|token| !token.is_empty())
}

fn write(slot: Slot, token: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable, {} not persisted", slot.key());
        return;
    };
    if storage.set_item(slot.key(), token).is_err() {
        log::warn!("Failed to persist {}", slot.key());
    }
}

pub fn save_access_token(token: &str) {
    write(Slot::Access, token);
}

pub fn get_access_token() -> Option<String> {
    read(Slot::Access)
}

pub fn save_refresh_token(token: &str) {
    write(Slot::Refresh, token);
}

pub fn get_refresh_token() -> Option<String> {
    read(Slot::Refresh)
}

pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        for slot in [Slot::Access, Slot::Refresh] {
            let _ = storage.remove_item(slot.key());
        }
    }
}
