use std::rc::Rc;

use gloo::console::{error, log};
use gloo::dialogs;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{ApiError, GlooApi};
use crate::board::ActivityBoard;
use crate::config::BoardConfig;
use crate::format;
use crate::surface::{
    ActivityCard, BoardSurface, ListView, ParticipantItem, ParticipantRow, StatusMessage,
};

/// `BoardSurface` backed by the component's state handles.
#[derive(Clone)]
pub struct YewSurface {
    list: UseStateHandle<ListView>,
    options: UseStateHandle<Vec<String>>,
    status: UseStateHandle<Option<StatusMessage>>,
    status_hidden: UseStateHandle<bool>,
    email: UseStateHandle<String>,
    selected: UseStateHandle<String>,
}

impl BoardSurface for YewSurface {
    fn show_activities(&self, view: ListView) {
        self.list.set(view);
    }

    fn set_activity_options(&self, names: Vec<String>) {
        self.options.set(names);
    }

    fn show_status(&self, status: StatusMessage) {
        self.status.set(Some(status));
        self.status_hidden.set(false);
    }

    fn hide_status_after(&self, delay_ms: u32) {
        let hidden = self.status_hidden.clone();
        // Not kept: a newer message can be hidden by an older timer.
        let _ = Timeout::new(delay_ms, move || hidden.set(true)).forget();
    }

    fn reset_form(&self) {
        self.email.set(String::new());
        self.selected.set(String::new());
    }

    fn confirm(&self, prompt: &str) -> bool {
        dialogs::confirm(prompt)
    }

    fn alert(&self, message: &str) {
        dialogs::alert(message);
    }

    fn log_info(&self, message: &str) {
        log!(message.to_string());
    }

    fn log_error(&self, context: &str, err: &ApiError) {
        error!(format!("{context}: {err}"));
    }
}

type Board = ActivityBoard<GlooApi, YewSurface>;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| {
        let (cfg, warning) = BoardConfig::load();
        if let Some(w) = warning {
            error!(w);
        }
        cfg
    });

    let list = use_state(ListView::default);
    let options = use_state(Vec::<String>::new);
    let status = use_state(|| None::<StatusMessage>);
    let status_hidden = use_state(|| true);
    let email = use_state(String::new);
    let selected = use_state(String::new);

    let board: Rc<Board> = {
        let surface = YewSurface {
            list: list.clone(),
            options: options.clone(),
            status: status.clone(),
            status_hidden: status_hidden.clone(),
            email: email.clone(),
            selected: selected.clone(),
        };
        let api = GlooApi::new(config.api_base.clone());
        Rc::new(ActivityBoard::new(api, surface).with_status_hide_ms(config.status_hide_ms))
    };

    // Initial load
    {
        let board = board.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                board.load_and_render().await;
            });
            || ()
        });
    }

    let on_remove = {
        let board = board.clone();
        Callback::from(move |(activity, email): (String, String)| {
            let board = board.clone();
            spawn_local(async move {
                board.remove_participant(&activity, &email).await;
            });
        })
    };

    let on_submit = {
        let board = board.clone();
        let email = email.clone();
        let selected = selected.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let board = board.clone();
            let email = (*email).clone();
            let activity = (*selected).clone();
            spawn_local(async move {
                board.submit_signup(&email, &activity).await;
            });
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            selected.set(sel.value());
        })
    };

    let list_body = match &*list {
        ListView::Loading => html! { <p>{ format::LOADING }</p> },
        ListView::Failed(msg) => html! { <p>{ msg.clone() }</p> },
        ListView::Loaded(cards) => html! {
            <>
              { for cards.iter().map(|card| activity_card(card, &on_remove)) }
            </>
        },
    };

    let status_block = match &*status {
        Some(s) => html! {
            <div id="message" class={classes!(s.kind.css_class(), status_hidden.then_some("hidden"))}>
              { s.text.clone() }
            </div>
        },
        None => html! { <div id="message" class="hidden"></div> },
    };

    html! {
      <div class="wrap">
        <header>
          <h1>{ "Extracurricular Activities" }</h1>
        </header>

        <main>
          <section id="activities-container">
            <h3>{ "Available Activities" }</h3>
            <div id="activities-list">
              { list_body }
            </div>
          </section>

          <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <form id="signup-form" onsubmit={on_submit}>
              <div class="form-group">
                <label for="email">{ "Student Email:" }</label>
                <input
                  type="email"
                  id="email"
                  required=true
                  placeholder="your-email@school.edu"
                  value={(*email).clone()}
                  oninput={on_email_input}
                />
              </div>
              <div class="form-group">
                <label for="activity">{ "Select Activity:" }</label>
                <select id="activity" required=true onchange={on_activity_change}>
                  <option value="" selected={selected.is_empty()}>{ format::SELECT_PLACEHOLDER }</option>
                  { for options.iter().map(|name| html! {
                      <option value={name.clone()} selected={*name == *selected}>{ name.clone() }</option>
                  }) }
                </select>
              </div>
              <button type="submit">{ "Sign Up" }</button>
            </form>
            { status_block }
          </section>
        </main>
      </div>
    }
}

fn activity_card(card: &ActivityCard, on_remove: &Callback<(String, String)>) -> Html {
    let rows = card
        .participant_items()
        .into_iter()
        .map(|item| match item {
            ParticipantItem::Placeholder => {
                html! { <li class="participant-empty">{ format::NO_PARTICIPANTS }</li> }
            }
            ParticipantItem::Participant(p) => participant_item(&card.name, &p, on_remove),
        });

    html! {
      <div class="activity-card" key={card.name.clone()}>
        <h4>{ card.name.clone() }</h4>
        <p>{ card.description.clone() }</p>
        <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
        <p><strong>{ "Availability:" }</strong>{ format!(" {}", card.availability) }</p>

        <div class="participants-section">
          <p><strong>{ card.participants_header.clone() }</strong></p>
          <ul class="participants-list">
            { for rows }
          </ul>
        </div>
      </div>
    }
}

fn participant_item(activity: &str, p: &ParticipantRow, on_remove: &Callback<(String, String)>) -> Html {
    let onclick = {
        let on_remove = on_remove.clone();
        let activity = activity.to_string();
        let email = p.email.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit((activity.clone(), email.clone())))
    };

    html! {
      <li class="participant-item">
        <span class="participant-avatar">{ p.initials.clone() }</span>
        <span class="participant-name">{ p.email.clone() }</span>
        <button type="button" class="participant-delete" title={format::REMOVE_TITLE} {onclick}>
          { "🗑️" }
        </button>
      </li>
    }
}
