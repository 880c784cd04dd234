//! Family page: member roster, invite code, and the tree view.
//!
//! The tree is laid out by `util::tree_layout` and rendered as SVG here;
//! this page only binds geometry to markup.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::member_badge::MemberBadge;
use crate::components::top_bar::TopBar;
use crate::state::auth::AuthState;
use crate::state::family::FamilyState;
use crate::util::tree_layout::layout_family;

#[component]
pub fn FamilyTreePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let family = expect_context::<RwSignal<FamilyState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate);

    // Bootstrap usually populated the roster already; refetch only when the
    // freshness window has lapsed. The family record itself (name, invite
    // code) is fetched alongside.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let Some(family_id) = auth.get().user.and_then(|u| u.family_id) else {
            return;
        };
        requested.set(true);

        let now = crate::util::clock::now_ms();
        let roster_fresh = family.get_untracked().is_fresh(now);
        let record_known = family.get_untracked().family.is_some();
        if roster_fresh && record_known {
            return;
        }
        family.update(|f| f.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let record = crate::net::api::fetch_family(&family_id).await;
            let members = if roster_fresh {
                Ok(family.get_untracked().members)
            } else {
                crate::net::api::fetch_family_members(&family_id).await
            };
            family.update(|f| {
                f.loading = false;
                match record {
                    Ok(value) => f.family = Some(value),
                    Err(e) => f.error = Some(e.to_string()),
                }
                match members {
                    Ok(list) => {
                        f.members = list;
                        f.fetched_at_ms = Some(crate::util::clock::now_ms());
                    }
                    Err(e) => f.error = Some(e.to_string()),
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = family_id;
        }
    });

    let tree = move || {
        let state = family.get();
        let (hub_id, hub_label) = state
            .family
            .as_ref()
            .map(|f| (f.id.clone(), f.name.clone()))
            .unwrap_or_else(|| ("family".to_owned(), "Family".to_owned()));
        let layout = layout_family(&hub_id, &hub_label, &state.members);

        view! {
            <svg
                class="family-tree"
                viewBox=format!("0 0 {} {}", layout.width, layout.height)
                width=layout.width
                height=layout.height
            >
                {layout
                    .edges
                    .iter()
                    .map(|edge| {
                        view! {
                            <line
                                class="family-tree__edge"
                                x1=edge.x1
                                y1=edge.y1
                                x2=edge.x2
                                y2=edge.y2
                            ></line>
                        }
                    })
                    .collect::<Vec<_>>()}
                {layout
                    .nodes
                    .iter()
                    .map(|node| {
                        let class = if node.is_hub {
                            "family-tree__node family-tree__node--hub"
                        } else {
                            "family-tree__node"
                        };
                        view! {
                            <g class=class>
                                <circle cx=node.x cy=node.y r="26"></circle>
                                <text x=node.x y={node.y + 44.0} text-anchor="middle">
                                    {node.label.clone()}
                                </text>
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
        }
    };

    view! {
        <div class="family-page">
            <TopBar heading="Family"/>
            <Show when=move || family.get().error.is_some()>
                <p class="family-page__error">{move || family.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !family.get().loading
                fallback=move || view! { <p>"Loading family..."</p> }
            >
                <section class="family-page__tree">{tree}</section>
                <section class="family-page__roster">
                    <h2>"Members"</h2>
                    <div class="family-page__badges">
                        {move || {
                            family
                                .get()
                                .members
                                .into_iter()
                                .map(|member| view! { <MemberBadge member=member/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
                <Show when=move || family.get().family.is_some()>
                    <section class="family-page__invite">
                        <h2>"Invite"</h2>
                        <p>
                            "Share this code: "
                            <code class="family-page__code">
                                {move || {
                                    family
                                        .get()
                                        .family
                                        .map(|f| f.invite_code)
                                        .unwrap_or_default()
                                }}
                            </code>
                        </p>
                    </section>
                </Show>
            </Show>
        </div>
    }
}
