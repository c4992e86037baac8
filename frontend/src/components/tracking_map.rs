use gloo_timers::callback::Interval;
use shared::{VehicleStatus, WasteVehicle};
use yew::prelude::*;

const WALK_TICK_MS: u32 = 3000;

fn unit_random() -> f64 {
    js_sys::Math::random()
}

fn status_class(status: VehicleStatus) -> &'static str {
    match status {
        VehicleStatus::Active => "status-active",
        VehicleStatus::Idle => "status-idle",
        VehicleStatus::Maintenance => "status-maintenance",
    }
}

fn vehicle_icon(vehicle: &WasteVehicle) -> &'static str {
    match vehicle.kind {
        shared::VehicleKind::Disposal => "fa-solid fa-recycle",
        _ => "fa-solid fa-truck",
    }
}

// Projects the demo fleet's LA-area coordinates onto the placeholder map box.
fn marker_style(vehicle: &WasteVehicle) -> String {
    let left = ((vehicle.location.lng + 118.3) / 0.1) * 100.0;
    let top = ((34.07 - vehicle.location.lat) / 0.03) * 100.0;
    format!("left: {:.2}%; top: {:.2}%;", left, top)
}

/// Live-looking fleet panel: a random walk perturbs each vehicle every few
/// seconds while the component is mounted. The interval dies with the
/// component, so an unmounted map never updates stale state.
#[function_component(TrackingMap)]
pub fn tracking_map() -> Html {
    let vehicles = use_state(WasteVehicle::seed_fleet);
    let selected_id = use_state(|| "V001".to_string());

    {
        let vehicles = vehicles.clone();
        use_effect_with((), move |_| {
            // The walk accumulates inside the closure; the state handle only
            // ever receives snapshots.
            let mut fleet = WasteVehicle::seed_fleet();
            let interval = Interval::new(WALK_TICK_MS, move || {
                for vehicle in &mut fleet {
                    vehicle.walk(unit_random(), unit_random(), unit_random());
                }
                vehicles.set(fleet.clone());
            });
            move || drop(interval)
        });
    }

    let selected = vehicles.iter().find(|v| v.id == *selected_id).cloned();

    let markers = vehicles.iter().map(|vehicle| {
        let selected_id = selected_id.clone();
        let id = vehicle.id.clone();
        let onclick = Callback::from(move |_| selected_id.set(id.clone()));
        html! {
            <div
                key={vehicle.id.clone()}
                class={classes!("map-marker", status_class(vehicle.status))}
                style={marker_style(vehicle)}
                title={format!("Vehicle {}", vehicle.id)}
                {onclick}
            ></div>
        }
    });

    html! {
        <div class="card tracking-map">
            <div class="card-header">
                <span>{"Real-Time Waste Tracking"}</span>
                <span class="badge">{"Live"}</span>
            </div>
            <div class="tracking-grid">
                <div class="map-area">
                    <p class="muted map-placeholder">{"Map visualization would appear here"}</p>
                    { for markers }
                </div>
                <div class="vehicle-panel">
                    {
                        match selected {
                            Some(vehicle) => render_vehicle_details(&vehicle),
                            None => html! {
                                <p class="muted">{"Select a vehicle to view details"}</p>
                            },
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn render_vehicle_details(vehicle: &WasteVehicle) -> Html {
    html! {
        <div class="vehicle-details">
            <div class="vehicle-title">
                <i class={vehicle_icon(vehicle)}></i>
                <h3>{ format!("Vehicle {}", vehicle.id) }</h3>
                <span class={classes!("badge", status_class(vehicle.status))}>
                    { vehicle.status.to_string() }
                </span>
            </div>

            <div class="vehicle-rows">
                <div class="vehicle-row">
                    <span class="muted">{"Type:"}</span>
                    <span>{ vehicle.kind.to_string() }</span>
                </div>
                <div class="vehicle-row">
                    <span class="muted">{"Waste Type:"}</span>
                    <span>{ vehicle.waste_type.clone() }</span>
                </div>
                <div class="vehicle-row">
                    <span class="muted">{"Location:"}</span>
                    <span>{ format!("{:.4}, {:.4}", vehicle.location.lat, vehicle.location.lng) }</span>
                </div>
                <div class="vehicle-row">
                    <span class="muted">{"Capacity:"}</span>
                    <span>{ format!("{:.0}%", vehicle.fill_level) }</span>
                </div>
                <div class="meter">
                    <div
                        class={classes!("meter-fill", vehicle.near_capacity().then_some("danger"))}
                        style={format!("width: {:.0}%", vehicle.fill_level)}
                    ></div>
                </div>
            </div>

            if vehicle.near_capacity() {
                <div class="capacity-warning">
                    <i class="fa-solid fa-triangle-exclamation"></i>
                    <span>{"Approaching capacity limit"}</span>
                </div>
            }
        </div>
    }
}
