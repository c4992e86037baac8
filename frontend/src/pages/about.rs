use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <header class="page-header">
                <h1>{"About Us"}</h1>
                <p class="muted">
                    {"We build technology that helps communities clear, sort, and \
                      recycle disaster waste safely."}
                </p>
            </header>

            <section class="card">
                <h2>{"Our Mission"}</h2>
                <p>
                    {"Disasters leave behind enormous volumes of mixed debris. Our \
                      mission is to turn that chaos into an organized recovery: every \
                      load classified, tracked, and routed to the safest possible \
                      destination."}
                </p>
                <h2>{"Our Vision"}</h2>
                <p>
                    {"A world where no recoverable material from a disaster ends up in \
                      a landfill, and no hazardous material ends up anywhere else."}
                </p>
            </section>

            <section class="values">
                <h2>{"Our Core Values"}</h2>
                <div class="feature-grid">
                    <div class="card feature-card">
                        <div class="icon-circle"><i class="fa-solid fa-leaf"></i></div>
                        <h3>{"Sustainability"}</h3>
                        <p class="muted">{"Maximize recovery and recycling in every cleanup operation."}</p>
                    </div>
                    <div class="card feature-card">
                        <div class="icon-circle"><i class="fa-solid fa-shield-halved"></i></div>
                        <h3>{"Safety"}</h3>
                        <p class="muted">{"Identify hazardous materials early and handle them properly."}</p>
                    </div>
                    <div class="card feature-card">
                        <div class="icon-circle"><i class="fa-solid fa-lightbulb"></i></div>
                        <h3>{"Innovation"}</h3>
                        <p class="muted">{"Apply AI and IoT where they genuinely speed up recovery."}</p>
                    </div>
                </div>
            </section>

            <section class="cta">
                <h2>{"Join Our Mission"}</h2>
                <p class="muted">{"Partner with us or try the platform on your next operation."}</p>
                <Link<Route> to={Route::Contact} classes="btn btn-primary">
                    {"Get in Touch"}
                </Link<Route>>
            </section>
        </div>
    }
}
