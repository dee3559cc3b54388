use leptos::leptos_dom::logging::console_log;
use leptos::prelude::{Callback, RwSignal, Show, Update, With};
use leptos::{IntoView, component, view};

use crate::components::access_gate::AccessGate;
use crate::gate::{BrowserStore, PortalGate};
use crate::pages::suite::Suite;

#[component]
pub fn Portal() -> impl IntoView {
    let gate = RwSignal::new(PortalGate::open(BrowserStore::default()));

    let logout = Callback::new(move |_: ()| {
        gate.update(|g| {
            g.logout();
        });
        console_log("logged out");
    });

    view! {
        <Show
            when=move || gate.with(|g| g.is_authenticated())
            fallback=move || view! { <AccessGate gate/> }
        >
            <Suite on_logout=logout/>
        </Show>
    }
}
