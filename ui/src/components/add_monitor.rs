use api::{check_monitor, create_monitor};
use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;
use shared::{
    add_monitor::{AddMonitorFlow, MONITOR_ADDED},
    CreateMonitorOutcome, Monitor,
};

use crate::{use_notifier, Button, ButtonVariant, Modal};

const INPUT_CLASSES: &str = "w-full p-2.5 rounded-md bg-slate-900 border border-slate-700 focus:border-sky-500 focus:outline-none text-white";

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    /// Interval requested for the new monitor, in seconds
    check_interval: u32,
    /// Called once the monitor exists and its first check was requested
    on_added: EventHandler<Monitor>,
}

#[component]
pub fn AddMonitor(props: Props) -> Element {
    let mut flow = use_signal(AddMonitorFlow::default);
    let notifier = use_notifier();

    let mut handle_continue = move || {
        flow.write().submit_url();
    };

    let mut handle_submit = move || {
        let Some(request) = flow.write().submit_password(props.check_interval) else {
            return;
        };

        spawn(async move {
            let monitor = match create_monitor(request).await {
                Ok(CreateMonitorOutcome::Created(monitor)) => monitor,
                Ok(CreateMonitorOutcome::Rejected { message }) => {
                    flow.write().creation_failed(message);
                    return;
                }
                Err(e) => {
                    warn!("Creating monitor failed: {e}");
                    flow.write().creation_failed(None);
                    return;
                }
            };

            if let Err(e) = check_monitor(monitor.id.clone()).await {
                error!("Initial check for {} failed: {e}", monitor.id);
            }

            flow.write().creation_succeeded();
            notifier.success(MONITOR_ADDED);
            props.on_added.call(monitor);
        });
    };

    let state = flow.read().clone();
    let submitting = state.is_submitting();
    let dialog_open = state.is_dialog_open();
    let url = state.url().to_string();
    let target = url.trim().to_string();
    let password = state.password().to_string();
    let error = state.error().map(str::to_string);

    rsx! {
      div { class: "bg-slate-800 border border-slate-700 rounded-xl p-5 mb-6",
        h2 { class: "text-lg font-semibold text-white mb-3", "Add a monitor" }
        div { class: "flex flex-col sm:flex-row gap-3",
          input {
            class: INPUT_CLASSES,
            value: "{url}",
            oninput: move |e| flow.write().set_url(e.value()),
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    handle_continue();
                }
            },
            placeholder: "https://example.com",
            "type": "url",
          }
          Button { onclick: move |_| handle_continue(), "Add Monitor" }
        }
        if !dialog_open {
          if let Some(error) = &error {
            p { class: "mt-2 text-sm text-red-300", "{error}" }
          }
        }
      }

      if dialog_open {
        Modal {
          on_close: move |_| flow.write().cancel(),
          dismissible: !submitting,
          header: rsx! {
            h3 { class: "text-lg font-semibold text-white", "Admin password required" }
          },
          p { class: "text-sm text-slate-400 mb-3",
            "Adding "
            span { class: "font-mono text-slate-200", "{target}" }
            " needs the admin password."
          }
          input {
            class: INPUT_CLASSES,
            value: "{password}",
            disabled: submitting,
            autofocus: true,
            oninput: move |e| flow.write().set_password(e.value()),
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    handle_submit();
                }
            },
            placeholder: "Password",
            "type": "password",
          }
          if let Some(error) = &error {
            p { class: "mt-2 text-sm text-red-300", "{error}" }
          }
          div { class: "flex justify-end gap-3 mt-4",
            Button {
              variant: ButtonVariant::Secondary,
              disabled: submitting,
              onclick: move |_| flow.write().cancel(),
              "Cancel"
            }
            Button {
              disabled: submitting,
              onclick: move |_| handle_submit(),
              if submitting {
                "Adding..."
              } else {
                "Add"
              }
            }
          }
        }
      }
    }
}
