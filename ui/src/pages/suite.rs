use leptos::prelude::{Callable, Callback, ClassAttribute, CollectView, ElementChild, OnAttribute};
use leptos::{IntoView, component, view};

struct AppGroup {
    title: &'static str,
    apps: [&'static str; 3],
}

const GROUPS: &[AppGroup] = &[
    AppGroup {
        title: "Monitoring Apps",
        apps: ["Heart Risk Monitor", "Emotional Well-being Tracker", "Fitness Tracker"],
    },
    AppGroup {
        title: "Diagnostic Apps",
        apps: ["Data Analysis", "Risk Assessment", "Health Insights"],
    },
    AppGroup {
        title: "Free Apps",
        apps: ["JSON Update App", "Notification App", "Basic Health Tools"],
    },
    AppGroup {
        title: "Triage Bots",
        apps: ["General Triage Bot", "Strep Bot", "Health Advisory Bot"],
    },
    AppGroup {
        title: "Health Library",
        apps: ["Medical Resources", "Health Guides", "Research Papers"],
    },
    AppGroup {
        title: "OTC Medication Apps",
        apps: ["OTC Med Checker", "Medication Chooser", "Safety Verification"],
    },
];

#[component]
fn GroupCard(group: &'static AppGroup) -> impl IntoView {
    view! {
        <article class="p-6 rounded-xl bg-white/90 shadow hover:shadow-lg transition-shadow">
            <h3 class="text-xl font-semibold text-primary mb-4">{ group.title }</h3>
            <ul class="space-y-2">
                { group.apps.iter().map(|app| view! { <li>"• " { *app }</li> }).collect_view() }
            </ul>
        </article>
    }
}

#[component]
pub fn Suite(on_logout: Callback<()>) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-neutral-light">
            <nav class="bg-white/80 backdrop-blur-sm shadow-md">
                <div class="max-w-6xl mx-auto px-6 py-3 flex justify-between items-center">
                    <span class="text-primary text-2xl font-bold">"Easy"<span class="text-accent">"GP"</span></span>
                    <button
                        class="px-4 py-2 rounded bg-accent text-primary hover:brightness-90"
                        on:click=move |_| on_logout.run(())
                    >
                        "Logout"
                    </button>
                </div>
            </nav>

            <div class="max-w-6xl mx-auto px-6 py-12 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                { GROUPS.iter().map(|group| view! { <GroupCard group/> }).collect_view() }
            </div>
        </div>
    }
}
