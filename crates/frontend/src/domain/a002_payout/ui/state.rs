use contracts::domain::a002_payout::aggregate::{EarningsSummary, Invoice, PaymentMethod, Payout};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_payout::api;

/// Data behind the payout tabs of one seller.
#[derive(Clone, Copy)]
pub struct PayoutsState {
    /// `None` for the signed-in seller.
    pub seller: StoredValue<Option<String>>,
    pub earnings: RwSignal<Option<EarningsSummary>>,
    pub payouts: RwSignal<Vec<Payout>>,
    pub methods: RwSignal<Vec<PaymentMethod>>,
    pub invoices: RwSignal<Vec<Invoice>>,
    pub error: RwSignal<Option<String>>,
}

impl PayoutsState {
    pub fn new(seller: Option<String>) -> Self {
        Self {
            seller: StoredValue::new(seller),
            earnings: RwSignal::new(None),
            payouts: RwSignal::new(Vec::new()),
            methods: RwSignal::new(Vec::new()),
            invoices: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        }
    }

    /// Admins look at someone else's payouts and cannot change them.
    pub fn read_only(&self) -> bool {
        self.seller.with_value(Option::is_some)
    }

    fn report(&self, result: Result<(), String>) {
        if let Err(e) = result {
            self.error.set(Some(e));
        }
    }

    pub fn load_earnings(&self) {
        let this = *self;
        spawn_local(async move {
            let seller = this.seller.get_value();
            let result = api::fetch_earnings(seller.as_deref())
                .await
                .map(|e| this.earnings.set(Some(e)));
            this.report(result);
        });
    }

    pub fn load_payouts(&self) {
        let this = *self;
        spawn_local(async move {
            let seller = this.seller.get_value();
            let result = api::fetch_payouts(seller.as_deref())
                .await
                .map(|p| this.payouts.set(p));
            this.report(result);
        });
    }

    pub fn load_methods(&self) {
        let this = *self;
        spawn_local(async move {
            let seller = this.seller.get_value();
            let result = api::fetch_payment_methods(seller.as_deref())
                .await
                .map(|m| this.methods.set(m));
            this.report(result);
        });
    }

    pub fn load_invoices(&self) {
        let this = *self;
        spawn_local(async move {
            let seller = this.seller.get_value();
            let result = api::fetch_invoices(seller.as_deref())
                .await
                .map(|i| this.invoices.set(i));
            this.report(result);
        });
    }

    pub fn load_all(&self) {
        self.error.set(None);
        self.load_earnings();
        self.load_payouts();
        self.load_methods();
        self.load_invoices();
    }

    /// Balance and history both move after a payout request.
    pub fn after_payout(&self) {
        self.load_earnings();
        self.load_payouts();
    }

    pub fn withdrawable(&self) -> f64 {
        self.earnings
            .with(|e| e.as_ref().map(|e| e.withdrawable_balance))
            .unwrap_or(0.0)
    }
}
