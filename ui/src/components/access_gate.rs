use leptos::ev::SubmitEvent;
use leptos::leptos_dom::logging::{console_log, console_warn};
use leptos::prelude::{
    ClassAttribute, Effect, ElementChild, Get, GlobalAttributes, Memo, OnAttribute,
    PropAttribute, RwSignal, Show, StoredValue, Update, UpdateValue, With, WithUntracked,
    event_target_value, on_cleanup,
};
use leptos::{IntoView, component, view};

use crate::gate::{LockoutTimer, PortalGate, Transition};

#[component]
pub fn AccessGate(gate: RwSignal<PortalGate>) -> impl IntoView {
    // the interval lives here and only here; a new lockout replaces it
    let countdown = StoredValue::new_local(LockoutTimer::default());
    let countdown_key = Memo::new(move |_| gate.with(|g| g.countdown_key()));

    Effect::new(move |_| match countdown_key.get() {
        Some(epoch) => {
            console_log(&format!("lockout #{epoch}: countdown started"));
            countdown.update_value(|c| {
                c.start(move || {
                    if gate.try_update(|g| g.tick()) == Some(Transition::Unlocked) {
                        console_log("lockout over");
                    }
                })
            });
        }
        None => countdown.update_value(LockoutTimer::stop),
    });

    on_cleanup(move || {
        countdown.try_update_value(LockoutTimer::stop);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        match gate.try_update(|g| g.submit()) {
            Some(Transition::Granted) => console_log("access granted"),
            Some(Transition::Rejected { failures }) => {
                console_log(&format!("access code rejected ({failures} so far)"))
            }
            Some(Transition::LockedOut { remaining_secs }) => {
                console_warn(&format!("too many attempts, locked for {remaining_secs}s"))
            }
            _ => {}
        }
    };

    let locked = move || gate.with(|g| g.state().is_locked());
    let hint = gate.with_untracked(|g| g.credential().hint());

    view! {
        <section id="login" class="min-h-[70vh] flex items-center justify-center p-4">
          <div class="w-full max-w-md p-8 rounded-2xl shadow bg-white/90 backdrop-blur">
            <h2 class="text-2xl font-bold text-primary text-center mb-1">"Access Required"</h2>
            <p class="text-center text-slate-600 mb-6">"Please enter your access code to continue"</p>

            <form class="space-y-4" on:submit=on_submit>
              <div class="space-y-2">
                <input
                    type="password"
                    placeholder="Enter access code"
                    class="w-full px-3 py-2 rounded border border-primary focus:border-accent"
                    prop:value=move || gate.with(|g| g.state().submitted_code().to_owned())
                    on:input=move |ev| gate.update(|g| {
                        g.edit(event_target_value(&ev));
                    })
                    disabled=locked
                />

                <Show when=move || gate.with(|g| g.error_message().is_some())>
                  <div role="alert" class="px-3 py-2 rounded bg-red-50 text-red-700">
                    { move || gate.with(|g| g.error_message()) }
                  </div>
                </Show>

                <Show when=locked>
                  <div role="status" class="px-3 py-2 rounded border border-accent bg-accent/10 text-primary">
                    { move || gate.with(|g| g.lockout_notice()) }
                  </div>
                </Show>
              </div>

              <button
                  type="submit"
                  class="w-full py-2 rounded bg-primary text-white hover:brightness-90 disabled:opacity-50"
                  disabled=move || !gate.with(|g| g.can_submit())
              >
                "Access Application"
              </button>

              <p class="mt-4 text-center text-sm text-primary">
                "Demo Access Code: "
                <span class="font-mono text-accent">{ hint }</span>
              </p>
            </form>
          </div>
        </section>
    }
}
