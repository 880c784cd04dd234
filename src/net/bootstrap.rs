//! Runner wiring the bootstrap machine to the live collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::bootstrap` decides; this module does. Commands from the machine
//! are interpreted against localStorage (session store), the REST API, a
//! `gloo-timers` timeout, the router, and the shared context signals, which
//! serve as the app-wide read cache for the fetched profile and roster.
//! Completion events flow back through an mpsc channel so the machine sees
//! network and timer callbacks as one ordered stream.
//!
//! All of it is gated behind `hydrate`: bootstrap only makes sense in a
//! browser.

#[cfg(feature = "hydrate")]
use std::cell::Cell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::bootstrap::{
    BOOTSTRAP_TIMEOUT_MS, BootstrapCommand, BootstrapEvent, BootstrapFlow,
};
#[cfg(feature = "hydrate")]
use crate::state::family::FamilyState;

/// Spawn one bootstrap run as a local async task and return immediately.
///
/// The flow itself guarantees a single terminal navigation; callers only
/// have to make sure they spawn this once per app entry.
#[cfg(feature = "hydrate")]
pub fn spawn_bootstrap<F>(auth: RwSignal<AuthState>, family: RwSignal<FamilyState>, navigate: F)
where
    F: Fn(&str) + 'static,
{
    leptos::task::spawn_local(run_bootstrap(auth, family, navigate));
}

#[cfg(feature = "hydrate")]
async fn run_bootstrap<F>(auth: RwSignal<AuthState>, family: RwSignal<FamilyState>, navigate: F)
where
    F: Fn(&str) + 'static,
{
    use futures::StreamExt;

    let (tx, mut rx) = futures::channel::mpsc::unbounded::<BootstrapEvent>();
    let timer_armed = Rc::new(Cell::new(false));

    let mut flow = BootstrapFlow::new();
    let mut pending = flow.start(crate::util::session::load_token());

    loop {
        for command in pending.drain(..) {
            execute(command, &tx, &timer_armed, auth, family, &navigate);
        }
        if flow.is_complete() {
            break;
        }
        let Some(event) = rx.next().await else {
            break;
        };
        pending = flow.apply(event);
    }

    leptos::logging::log!("bootstrap finished: {:?}", flow.outcome());
}

#[cfg(feature = "hydrate")]
fn execute<F>(
    command: BootstrapCommand,
    tx: &futures::channel::mpsc::UnboundedSender<BootstrapEvent>,
    timer_armed: &Rc<Cell<bool>>,
    auth: RwSignal<AuthState>,
    family: RwSignal<FamilyState>,
    navigate: &F,
) where
    F: Fn(&str) + 'static,
{
    match command {
        BootstrapCommand::FetchUser { token } => {
            let tx = tx.clone();
            leptos::task::spawn_local(async move {
                let event = match crate::net::api::fetch_current_user(&token).await {
                    Ok(profile) => BootstrapEvent::UserResolved(profile),
                    Err(error) => BootstrapEvent::UserFailed(error),
                };
                let _ = tx.unbounded_send(event);
            });
        }
        BootstrapCommand::FetchFamily { family_id } => {
            let tx = tx.clone();
            leptos::task::spawn_local(async move {
                let event = match crate::net::api::fetch_family_members(&family_id).await {
                    Ok(members) => BootstrapEvent::FamilyResolved(members),
                    Err(error) => BootstrapEvent::FamilyFailed(error),
                };
                let _ = tx.unbounded_send(event);
            });
        }
        BootstrapCommand::StartTimeout => {
            timer_armed.set(true);
            let armed = timer_armed.clone();
            let tx = tx.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    BOOTSTRAP_TIMEOUT_MS,
                )))
                .await;
                // Disarmed timers must not force a failure into a run that
                // already completed (or into a later run).
                if armed.get() {
                    let _ = tx.unbounded_send(BootstrapEvent::TimedOut);
                }
            });
        }
        BootstrapCommand::CancelTimeout => {
            timer_armed.set(false);
        }
        BootstrapCommand::CacheUser(profile) => {
            auth.update(|a| {
                a.user = Some(profile);
                a.loading = false;
                a.fetched_at_ms = Some(crate::util::clock::now_ms());
            });
        }
        BootstrapCommand::CacheFamily(members) => {
            family.update(|f| {
                f.members = members;
                f.loading = false;
                f.error = None;
                f.fetched_at_ms = Some(crate::util::clock::now_ms());
            });
        }
        BootstrapCommand::ClearSession => {
            crate::util::session::clear_token();
            auth.update(|a| {
                a.user = None;
                a.loading = false;
                a.fetched_at_ms = None;
            });
        }
        BootstrapCommand::Navigate(path) => {
            navigate(&path);
        }
    }
}
