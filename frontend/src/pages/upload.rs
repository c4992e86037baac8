use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::{Interval, Timeout};
use shared::{AnalysisResult, Phase, UploadSession};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

const PROGRESS_STEP: u8 = 5;
const PROGRESS_TICK_MS: u32 = 100;
const COMPLETE_DELAY_MS: u32 = 500;

/// The payload an upload session carries on the browser side.
pub struct SelectedImage {
    file: GlooFile,
    preview_url: ObjectUrl,
}

pub enum Msg {
    FileSelected(GlooFile),
    ClearImage,
    StartAnalysis,
    ProgressTick,
    AnalysisDone,
    SetDragging(bool),
    HandleDrop(DragEvent),
}

/// The upload-analyze flow. All state transitions live in `UploadSession`;
/// this component owns the session plus the timers that drive the simulated
/// analysis, and cancels them whenever the session is reset or torn down.
pub struct Upload {
    session: UploadSession<SelectedImage>,
    progress_timer: Option<Interval>,
    complete_timer: Option<Timeout>,
    is_dragging: bool,
}

impl Component for Upload {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: UploadSession::new(),
            progress_timer: None,
            complete_timer: None,
            is_dragging: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(file) => {
                self.cancel_timers();
                let preview_url = ObjectUrl::from(file.clone());
                self.session.select_image(SelectedImage { file, preview_url });
                true
            }
            Msg::ClearImage => {
                self.cancel_timers();
                self.session.clear_image();
                true
            }
            Msg::StartAnalysis => {
                if !self.session.start_analysis() {
                    return false;
                }
                let link = ctx.link().clone();
                self.progress_timer = Some(Interval::new(PROGRESS_TICK_MS, move || {
                    link.send_message(Msg::ProgressTick);
                }));
                true
            }
            Msg::ProgressTick => {
                if self.session.advance(PROGRESS_STEP) {
                    if let Some(timer) = self.progress_timer.take() {
                        timer.cancel();
                    }
                    let link = ctx.link().clone();
                    self.complete_timer = Some(Timeout::new(COMPLETE_DELAY_MS, move || {
                        link.send_message(Msg::AnalysisDone);
                    }));
                }
                true
            }
            Msg::AnalysisDone => {
                self.complete_timer = None;
                self.session.complete(AnalysisResult::demo());
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => {
                event.prevent_default();
                self.is_dragging = false;
                let file = event
                    .data_transfer()
                    .and_then(|dt| dt.files())
                    .and_then(|files| files.item(0));
                if let Some(file) = file {
                    ctx.link().send_message(Msg::FileSelected(GlooFile::from(file)));
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page upload-page">
                <header class="page-header">
                    <h1>{"Waste Image Analysis"}</h1>
                    <p class="muted">
                        {"Upload an image of waste materials for AI-powered classification \
                          and recycling recommendations."}
                    </p>
                </header>

                <div class="two-column">
                    { self.render_upload_card(ctx) }
                    { self.render_results_card() }
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // A timer firing after unmount must not touch a discarded session.
        self.cancel_timers();
    }
}

impl Upload {
    fn cancel_timers(&mut self) {
        if let Some(timer) = self.progress_timer.take() {
            timer.cancel();
        }
        if let Some(timer) = self.complete_timer.take() {
            timer.cancel();
        }
    }

    fn render_upload_card(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let handle_change = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.item(0));
            input.set_value("");
            file.map(|file| Msg::FileSelected(GlooFile::from(file)))
        });
        let handle_drag_over = link.callback(|e: DragEvent| {
            e.prevent_default();
            Msg::SetDragging(true)
        });
        let handle_drag_leave = link.callback(|e: DragEvent| {
            e.prevent_default();
            Msg::SetDragging(false)
        });
        let handle_drop = link.callback(Msg::HandleDrop);

        let trigger_file_input = Callback::from(|_: MouseEvent| {
            if let Some(input) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("file-input"))
            {
                if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                    input.click();
                }
            }
        });

        html! {
            <div class="card upload-card">
                <h2>{"Upload Waste Image"}</h2>

                <div
                    id="drop-zone"
                    class={classes!("upload-area", self.is_dragging.then_some("drag-over"))}
                    ondragover={handle_drag_over}
                    ondragleave={handle_drag_leave}
                    ondrop={handle_drop}
                >
                    <input
                        type="file"
                        id="file-input"
                        accept="image/*"
                        style="display: none;"
                        onchange={handle_change}
                    />
                    { self.render_drop_zone_content(ctx, trigger_file_input) }
                </div>

                { self.render_upload_actions(ctx) }
            </div>
        }
    }

    fn render_drop_zone_content(
        &self,
        ctx: &Context<Self>,
        trigger_file_input: Callback<MouseEvent>,
    ) -> Html {
        match self.session.image() {
            Some(image) => html! {
                <div class="image-preview">
                    <img
                        src={image.preview_url.to_string()}
                        alt={image.file.name()}
                    />
                    <button
                        class="remove-btn"
                        title="Remove this image"
                        onclick={ctx.link().callback(|_| Msg::ClearImage)}
                    >
                        <i class="fa-solid fa-trash"></i>
                    </button>
                </div>
            },
            None => html! {
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag and drop an image here"}</p>
                    <p class="muted">{"or"}</p>
                    <button class="btn btn-primary" onclick={trigger_file_input}>
                        {"Browse Files"}
                    </button>
                    <p class="file-types">{"Supported formats: JPG, PNG, WEBP"}</p>
                </div>
            },
        }
    }

    fn render_upload_actions(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match self.session.phase() {
            Phase::ImageSelected => html! {
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::StartAnalysis)}>
                    <i class="fa-solid fa-camera"></i>{" Analyze Waste"}
                </button>
            },
            Phase::Analyzing => html! {
                <div class="progress-block">
                    <div class="progress-labels">
                        <span>{"Analyzing image..."}</span>
                        <span>{ format!("{}%", self.session.progress()) }</span>
                    </div>
                    <div class="meter">
                        <div
                            class="meter-fill"
                            style={format!("width: {}%", self.session.progress())}
                        ></div>
                    </div>
                </div>
            },
            Phase::Complete => html! {
                <button class="btn btn-outline" onclick={link.callback(|_| Msg::ClearImage)}>
                    {"Upload New Image"}<i class="fa-solid fa-rotate"></i>
                </button>
            },
            Phase::Idle => html! {},
        }
    }

    fn render_results_card(&self) -> Html {
        let body = match (self.session.phase(), self.session.result()) {
            (Phase::Idle, _) => render_results_placeholder(
                "fa-solid fa-camera",
                "No Image Selected",
                "Upload an image of waste materials to receive AI-powered analysis \
                 and recycling recommendations.",
            ),
            (Phase::ImageSelected, _) => render_results_placeholder(
                "fa-solid fa-camera",
                "Ready for Analysis",
                "Click the 'Analyze Waste' button to start the AI-powered analysis process.",
            ),
            (Phase::Analyzing, _) => render_results_placeholder(
                "fa-solid fa-rotate fa-spin",
                "Analyzing Image...",
                "Our AI is processing your image to classify waste types and determine \
                 recyclability.",
            ),
            (Phase::Complete, Some(result)) => render_analysis_results(result),
            // Unreachable while the session invariant holds.
            (Phase::Complete, None) => html! {},
        };

        html! {
            <div class="card results-card">
                <h2>{"Analysis Results"}</h2>
                { body }
            </div>
        }
    }
}

fn render_results_placeholder(icon: &str, title: &str, blurb: &str) -> Html {
    html! {
        <div class="results-placeholder">
            <div class="icon-circle"><i class={icon.to_string()}></i></div>
            <h3>{ title.to_string() }</h3>
            <p class="muted">{ blurb.to_string() }</p>
        </div>
    }
}

fn render_analysis_results(result: &AnalysisResult) -> Html {
    html! {
        <div class="analysis-results">
            <div class="result-status">
                <i class="fa-solid fa-circle-check"></i>
                <span>{"Analysis Complete"}</span>
            </div>

            <div class="result-section">
                <h3>{"Waste Type"}</h3>
                <p class="result-primary">{ result.waste_type.clone() }</p>
            </div>

            <div class="result-section">
                <h3>{"Recyclability"}</h3>
                <div class="meter-row">
                    <div class="meter">
                        <div
                            class="meter-fill"
                            style={format!("width: {}%", result.recyclable_percentage)}
                        ></div>
                    </div>
                    <span>{ format!("{}%", result.recyclable_percentage) }</span>
                </div>
            </div>

            <div class="result-section">
                <h3>{"Hazardous"}</h3>
                <p class={classes!("hazard-flag", result.hazardous.then_some("danger"))}>
                    { if result.hazardous { "Yes" } else { "No" } }
                </p>
            </div>

            <div class="result-section">
                <h3>{"Recommended Disposal"}</h3>
                <p>{ result.disposal_method.clone() }</p>
            </div>

            <div class="result-section">
                <h3>{"Material Composition"}</h3>
                <div class="result-bars">
                    { for result.materials.iter().map(|material| html! {
                        <div class="result-item" key={material.name.clone()}>
                            <div class="result-labels">
                                <span>{ material.name.clone() }</span>
                                <span>{ format!("{}%", material.percentage) }</span>
                            </div>
                            <div class="meter">
                                <div
                                    class="meter-fill"
                                    style={format!("width: {}%", material.percentage)}
                                ></div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="result-section">
                <h3>{"Environmental Impact"}</h3>
                <ul class="impact-list">
                    <li>{ format!("CO₂ saved: {}", result.environmental_impact.co2_saved) }</li>
                    <li>{ format!("Water saved: {}", result.environmental_impact.water_saved) }</li>
                    <li>{ format!("Energy saved: {}", result.environmental_impact.energy_saved) }</li>
                </ul>
            </div>

            <div class="result-section">
                <h3>{"Recommendations"}</h3>
                <ul>
                    { for result.recommendations.iter().map(|r| html! {
                        <li key={r.clone()}>{ r.clone() }</li>
                    }) }
                </ul>
            </div>
        </div>
    }
}
