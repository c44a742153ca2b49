use contracts::domain::a002_payout::aggregate::PaymentMethodType;
use contracts::domain::a002_payout::form::{
    validate_payout_amount, PaymentMethodForm, MIN_PAYOUT_AMOUNT,
};
use contracts::system::access::permissions::role_permissions;
use contracts::system::access::{check_access, menu, AccessDenied, Role};
use contracts::system::auth::UserInfo;
use proptest::prelude::*;

const KNOWN_ROLES: [&str; 4] = ["superadmin", "admin", "agent", "seller"];

fn all_menu_ids() -> Vec<&'static str> {
    role_permissions(Role::Superadmin)
        .iter()
        .map(|(id, _)| *id)
        .collect()
}

fn menu_id() -> impl Strategy<Value = &'static str> {
    prop::sample::select(all_menu_ids())
}

fn seller_status() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "pending", "approved", "rejected", "suspended", "",
        "Approved", "APPROVED", " approved", "approved ",
    ]))
    .prop_map(|s| s.map(str::to_string))
}

fn bank_form(holder: String, bank: String, account: String) -> PaymentMethodForm {
    PaymentMethodForm {
        method_type: PaymentMethodType::BankTransfer,
        account_holder_name: holder,
        bank_name: bank,
        account_number: account,
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn unknown_roles_are_denied_everywhere(role in "[a-z]{0,12}", id in menu_id()) {
        prop_assume!(!KNOWN_ROLES.contains(&role.as_str()));
        let user = UserInfo { role, status: Some(true), ..Default::default() };
        prop_assert_eq!(check_access(Some(&user), id), Err(AccessDenied::InvalidRole));
    }

    #[test]
    fn padded_roles_are_denied(
        role in prop::sample::select(KNOWN_ROLES.to_vec()),
        pad in prop::sample::select(vec![" ", "\t", "\n"]),
        leading in any::<bool>(),
        id in menu_id(),
    ) {
        let role = if leading { format!("{}{}", pad, role) } else { format!("{}{}", role, pad) };
        let user = UserInfo { role, status: Some(true), ..Default::default() };
        prop_assert_eq!(check_access(Some(&user), id), Err(AccessDenied::InvalidRole));
    }

    #[test]
    fn seller_profile_is_always_reachable(is_seller in prop::option::of(any::<bool>()), status in seller_status()) {
        let user = UserInfo {
            role: "seller".to_string(),
            is_seller,
            seller_status: status,
            ..Default::default()
        };
        prop_assert!(check_access(Some(&user), menu::PROFILE).is_ok());
    }

    #[test]
    fn seller_sections_need_approval(
        is_seller in prop::option::of(any::<bool>()),
        status in seller_status(),
        id in menu_id(),
    ) {
        prop_assume!(id != menu::PROFILE);
        let user = UserInfo {
            role: "seller".to_string(),
            is_seller,
            seller_status: status.clone(),
            ..Default::default()
        };
        let approved = is_seller == Some(true) && status.as_deref() == Some("approved");
        let permitted = role_permissions(Role::Seller)
            .iter()
            .any(|(m, p)| *m == id && p.access);
        prop_assert_eq!(check_access(Some(&user), id).is_ok(), approved && permitted);
    }

    #[test]
    fn suspension_denies_every_section(role_idx in 0usize..4, id in menu_id()) {
        let user = UserInfo {
            role: KNOWN_ROLES[role_idx].to_string(),
            status: Some(false),
            is_seller: Some(true),
            seller_status: Some("approved".to_string()),
            ..Default::default()
        };
        prop_assert!(check_access(Some(&user), id).is_err());
    }

    #[test]
    fn payout_amount_bounds(amount in -1_000.0f64..10_000.0, balance in 0.0f64..5_000.0) {
        let accepted = validate_payout_amount(amount, balance).is_none();
        let in_range = amount > 0.0 && amount >= MIN_PAYOUT_AMOUNT && amount <= balance;
        prop_assert_eq!(accepted, in_range);
    }

    #[test]
    fn bank_details_with_minimums_are_accepted(
        holder in "[A-Za-z]{2,20}",
        bank in "[A-Za-z]{2,20}",
        account in "[0-9]{6,18}",
    ) {
        prop_assert!(bank_form(holder, bank, account).validate().is_empty());
    }

    #[test]
    fn short_account_numbers_are_rejected(account in "[0-9]{0,5}") {
        let errors = bank_form("Anna".to_string(), "Sparkasse".to_string(), account).validate();
        prop_assert!(errors.contains("account_number"));
    }

    #[test]
    fn short_iban_is_rejected(iban in "[A-Z0-9]{1,14}") {
        let mut form = bank_form("Anna".to_string(), "Sparkasse".to_string(), "12345678".to_string());
        form.iban = iban;
        prop_assert!(form.validate().contains("iban"));
    }

    #[test]
    fn swift_length_is_enforced(swift in "[A-Z0-9]{1,15}") {
        let mut form = bank_form("Anna".to_string(), "Sparkasse".to_string(), "12345678".to_string());
        let len = swift.len();
        form.swift_code = swift;
        prop_assert_eq!(form.validate().contains("swift_code"), !(8..=11).contains(&len));
    }

    #[test]
    fn paypal_requires_at_and_domain(local in "[a-z]{1,10}", domain in "[a-z]{2,10}") {
        let valid = PaymentMethodForm {
            method_type: PaymentMethodType::Paypal,
            paypal_email: format!("{}@{}.com", local, domain),
            ..Default::default()
        };
        prop_assert!(valid.validate().is_empty());

        let missing_at = PaymentMethodForm {
            paypal_email: format!("{}{}.com", local, domain),
            ..valid.clone()
        };
        prop_assert!(missing_at.validate().contains("paypal_email"));
    }
}
