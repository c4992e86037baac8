use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found-page">
            <div class="icon-circle large">
                <i class="fa-solid fa-triangle-exclamation"></i>
            </div>
            <h1>{"404"}</h1>
            <h2>{"Page Not Found"}</h2>
            <p class="muted">{"The page you are looking for doesn't exist or has been moved."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                <i class="fa-solid fa-house"></i>{" Back to Home"}
            </Link<Route>>
        </div>
    }
}
