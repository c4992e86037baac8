use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">
            <div class="footer-grid">
                <div class="footer-col">
                    <h3 class="brand">{"DisasterWaste"}</h3>
                    <p class="muted">
                        {"Revolutionizing disaster waste management with AI and IoT technology \
                          for a cleaner, safer environment."}
                    </p>
                </div>

                <div class="footer-col">
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Upload}>{"Upload Waste"}</Link<Route>></li>
                    </ul>
                </div>

                <div class="footer-col">
                    <h3>{"Services"}</h3>
                    <ul>
                        <li>{"Waste Classification"}</li>
                        <li>{"Real-Time Tracking"}</li>
                        <li>{"Disaster Response"}</li>
                        <li>{"Recycling Programs"}</li>
                    </ul>
                </div>

                <div class="footer-col">
                    <h3>{"Contact Us"}</h3>
                    <ul>
                        <li><i class="fa-solid fa-location-dot"></i>{" 123 Green Street, Eco City"}</li>
                        <li><i class="fa-solid fa-phone"></i>{" +1 (555) 123-4567"}</li>
                        <li><i class="fa-solid fa-envelope"></i>{" info@disasterwaste.example"}</li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{"© 2026 Disaster Waste Management System. All rights reserved."}</p>
            </div>
        </footer>
    }
}
