use leptos::prelude::{ClassAttribute, CollectView, ElementChild, GlobalAttributes};
use leptos::{IntoView, component, view};

const PORTAL_HREF: &str = "/portal";

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="py-24 text-center">
            <h1 class="text-5xl sm:text-6xl font-bold text-white mb-8">
                "Empowering Your Health Journey"
            </h1>
            <p class="text-xl text-neutral-light mb-12 max-w-3xl mx-auto">
                "Take control of your health with personalized tools designed to keep you safe and informed."
            </p>
            <a
                href=PORTAL_HREF
                class="inline-block bg-accent text-primary px-8 py-4 rounded-full font-semibold hover:brightness-90 transition"
            >"Get Started"</a>
        </section>
    }
}

const FEATURES: &[(&str, &str)] = &[
    (
        "Monitoring Apps",
        "Track various health metrics, such as heart risk, emotional well-being, and fitness.",
    ),
    (
        "Secure Data Management",
        "Your health data is stored securely in user-owned JSON files with PIN protection.",
    ),
    (
        "Comprehensive Tools",
        "Access a complete suite of general practice applications with your subscription.",
    ),
];

#[component]
fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-16">
            <h2 class="text-3xl font-bold text-primary text-center mb-12">"Our Features"</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {
                    FEATURES
                        .iter()
                        .map(|(title, description)| view! {
                            <article class="p-8 rounded-xl bg-white/90 shadow">
                                <h3 class="text-xl font-semibold mb-4 text-slate-800">{ *title }</h3>
                                <p class="text-slate-600 leading-relaxed">{ *description }</p>
                            </article>
                        })
                        .collect_view()
                }
            </div>
        </section>
    }
}

#[component]
fn Cta() -> impl IntoView {
    view! {
        <section id="cta" class="py-24 text-center text-white">
            <h2 class="text-4xl md:text-5xl font-bold mb-8">
                "Begin Your Journey to Premium Healthcare"
            </h2>
            <p class="text-xl mb-12 text-white/90 max-w-3xl mx-auto">
                "Join thousands of satisfied patients who have transformed their healthcare experience with EasyGP."
            </p>
            <a
                href=PORTAL_HREF
                class="inline-block bg-accent text-primary px-8 py-4 rounded-full font-semibold hover:brightness-90 transition"
            >"Get Started Today"</a>
        </section>
    }
}

#[component]
pub fn Landing() -> impl IntoView {
    view! {
      <main class="max-w-6xl mx-auto px-6">
          <Hero/>
          <Features/>
          <Cta/>
      </main>
    }
}
