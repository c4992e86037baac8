use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page home-page">
            <section class="hero">
                <h1>{"Smart Disaster Waste Management"}</h1>
                <p class="muted">
                    {"AI-powered waste classification, real-time fleet tracking, and \
                      analytics that help communities recover faster after disasters."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Upload} classes="btn btn-primary">
                        {"Analyze Waste Now"}
                    </Link<Route>>
                    <Link<Route> to={Route::Dashboard} classes="btn btn-outline">
                        {"View Dashboard"}
                    </Link<Route>>
                </div>
            </section>

            <section class="features">
                <h2>{"Our Key Features"}</h2>
                <div class="feature-grid">
                    <div class="card feature-card">
                        <div class="icon-circle"><i class="fa-solid fa-truck"></i></div>
                        <h3>{"Real-Time Tracking"}</h3>
                        <p class="muted">
                            {"Follow collection, transport, and disposal vehicles across \
                              the operation area as they work."}
                        </p>
                    </div>
                    <div class="card feature-card">
                        <div class="icon-circle"><i class="fa-solid fa-robot"></i></div>
                        <h3>{"AI Waste Classification"}</h3>
                        <p class="muted">
                            {"Upload a photo of debris and get an instant material \
                              breakdown with disposal recommendations."}
                        </p>
                    </div>
                    <div class="card feature-card">
                        <div class="icon-circle"><i class="fa-solid fa-chart-line"></i></div>
                        <h3>{"Analytics Dashboard"}</h3>
                        <p class="muted">
                            {"Collection volumes, recycling rates, and hazardous waste \
                              figures at a glance."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="how-it-works">
                <h2>{"How It Works"}</h2>
                <ol class="steps">
                    <li>
                        <h3>{"Upload Waste Images"}</h3>
                        <p class="muted">{"Snap a photo of disaster debris and upload it from any device."}</p>
                    </li>
                    <li>
                        <h3>{"AI Classification"}</h3>
                        <p class="muted">{"The platform classifies materials and flags anything hazardous."}</p>
                    </li>
                    <li>
                        <h3>{"Track & Manage"}</h3>
                        <p class="muted">{"Dispatch vehicles and follow the cleanup through to disposal."}</p>
                    </li>
                </ol>
            </section>

            <section class="cta">
                <h2>{"Ready to transform your disaster response?"}</h2>
                <Link<Route> to={Route::Signup} classes="btn btn-primary">
                    {"Get Started"}
                </Link<Route>>
            </section>
        </div>
    }
}
