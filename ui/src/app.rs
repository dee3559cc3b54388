use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::*;
use crate::routes::RoutesMenu;
use leptos_router::components::Router;

use leptos_meta::Title;
use leptos_meta::provide_meta_context;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Title text="EasyGP"/>
      <Router>
        <header class="sticky top-0 z-50 bg-white/80 backdrop-blur-sm shadow-md">
          <div class="max-w-6xl mx-auto flex justify-between items-center px-6 py-4">
            <a href="/" class="text-2xl font-bold text-primary">"Easy"<span class="text-accent">"GP"</span></a>
            <nav class="hidden md:flex gap-8 text-primary">
              <a href="/#home">"Welcome"</a>
              <a href="/#features">"Features"</a>
              <a href="/portal">"Login"</a>
            </nav>
          </div>
        </header>

        <div class="min-h-screen bg-gradient-to-br from-primary via-secondary to-accent">
          <RoutesMenu/>
        </div>

        <footer class="bg-white text-primary py-8">
          <div class="max-w-6xl mx-auto px-6 flex flex-col sm:flex-row justify-between gap-8">
            <p>"© 2025 EasyGP — Premium healthcare at your fingertips."</p>
            <nav class="flex gap-6 underline-offset-4">
              <a href="/#home">"Home"</a>
              <a href="/portal">"Portal"</a>
            </nav>
          </div>
        </footer>
      </Router>
    }
}
