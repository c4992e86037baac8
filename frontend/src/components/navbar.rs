use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NAV_ITEMS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::About, "About Us"),
    (Route::Contact, "Contact"),
    (Route::Upload, "Upload Waste"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let nav_links = NAV_ITEMS.iter().map(|(route, label)| {
        html! {
            <Link<Route> to={route.clone()} classes="nav-link">
                { *label }
            </Link<Route>>
        }
    });

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="brand">
                    <i class="fa-solid fa-recycle"></i>
                    <span>{"DisasterWaste"}</span>
                </Link<Route>>

                <div class="nav-links">
                    { for nav_links.clone() }
                    <Link<Route> to={Route::Login} classes="nav-link nav-login">
                        {"Login"}
                    </Link<Route>>
                    <Link<Route> to={Route::Signup} classes="btn btn-primary">
                        {"Sign Up"}
                    </Link<Route>>
                </div>

                <button class="menu-toggle" onclick={toggle_menu} title="Toggle navigation">
                    <i class="fa-solid fa-bars"></i>
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu" onclick={close_menu}>
                    { for nav_links }
                    <Link<Route> to={Route::Login} classes="nav-link">{"Login"}</Link<Route>>
                    <Link<Route> to={Route::Signup} classes="nav-link">{"Sign Up"}</Link<Route>>
                </div>
            }
        </nav>
    }
}
