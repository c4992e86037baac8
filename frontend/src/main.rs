mod api;
mod components;
mod pages;

use yew::prelude::*;
use yew_router::prelude::*;

use components::footer::Footer;
use components::navbar::Navbar;
use pages::about::About;
use pages::contact::Contact;
use pages::dashboard::Dashboard;
use pages::home::Home;
use pages::login::Login;
use pages::not_found::NotFound;
use pages::signup::Signup;
use pages::upload::Upload;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    #[at("/upload")]
    Upload,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        Route::Signup => html! { <Signup /> },
        Route::Login => html! { <Login /> },
        Route::Upload => html! { <Upload /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <main class="main-content">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
