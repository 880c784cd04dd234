//! Small avatar + nickname chip for family members.

use leptos::prelude::*;

use crate::net::types::FamilyMember;

/// Inline badge identifying a member, used for participants and rosters.
#[component]
pub fn MemberBadge(member: FamilyMember) -> impl IntoView {
    let initial = member.nickname.chars().next().unwrap_or('?').to_string();

    view! {
        <span class="member-badge">
            {match member.avatar_url {
                Some(url) => view! { <img class="member-badge__avatar" src=url alt=""/> }.into_any(),
                None => view! { <span class="member-badge__initial">{initial}</span> }.into_any(),
            }}
            <span class="member-badge__name">{member.nickname}</span>
        </span>
    }
}
