use yew::prelude::*;

use crate::components::tracking_map::TrackingMap;

struct StatCard {
    label: &'static str,
    value: &'static str,
    unit: &'static str,
    icon: &'static str,
    trend: &'static str,
    trend_class: &'static str,
}

// Demo figures only; nothing on this dashboard is backed by real data.
const STATS: [StatCard; 4] = [
    StatCard {
        label: "Total Waste Collected",
        value: "256.8",
        unit: "tons",
        icon: "fa-solid fa-trash",
        trend: "↑ 12% from last week",
        trend_class: "trend-up",
    },
    StatCard {
        label: "Recycled Materials",
        value: "142.3",
        unit: "tons",
        icon: "fa-solid fa-recycle",
        trend: "↑ 8% from last week",
        trend_class: "trend-up",
    },
    StatCard {
        label: "Active Vehicles",
        value: "18",
        unit: "units",
        icon: "fa-solid fa-truck",
        trend: "↓ 2 in maintenance",
        trend_class: "trend-warn",
    },
    StatCard {
        label: "Hazardous Waste",
        value: "32.5",
        unit: "tons",
        icon: "fa-solid fa-triangle-exclamation",
        trend: "↑ 5% requires special handling",
        trend_class: "trend-danger",
    },
];

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <div class="page dashboard-page">
            <header class="page-header">
                <h1>{"Waste Management Dashboard"}</h1>
                <p class="muted">{"Operation overview and live fleet status."}</p>
            </header>

            <div class="stat-grid">
                { for STATS.iter().map(|stat| html! {
                    <div class="card stat-card" key={stat.label}>
                        <div class="stat-top">
                            <div>
                                <p class="muted">{ stat.label }</p>
                                <h3>{ stat.value }</h3>
                                <p class="stat-unit">{ stat.unit }</p>
                            </div>
                            <div class="icon-circle"><i class={stat.icon}></i></div>
                        </div>
                        <p class={classes!("stat-trend", stat.trend_class)}>{ stat.trend }</p>
                    </div>
                }) }
            </div>

            <TrackingMap />
        </div>
    }
}
