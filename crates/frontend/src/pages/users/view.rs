use super::state::{create_state, role_options, UsersTab};
use crate::shared::icons::icon;
use crate::shared::stat_card::StatCard;
use contracts::data;
use contracts::domain::User;
use contracts::enums::{UserRole, UserStatus};
use contracts::views::{departments, filter_users, UserStats};
use leptos::prelude::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    let state = create_state();

    let stats = UserStats::of(data::users());

    let filtered = move || {
        let s = state.get();
        filter_users(data::users(), &s.q, &s.role)
    };

    view! {
        <div class="page page--users">
            <div class="page__header">
                <h1>"User Management"</h1>
                <p class="page__subtitle">"Manage users, roles, and permissions"</p>
            </div>

            <div class="stat-grid">
                <StatCard label="Total Users" value=stats.total.to_string() glyph="users" />
                <StatCard label="Active" value=stats.active.to_string() glyph="check-circle" tone="stat-card__value--green" />
                <StatCard label="Admins" value=stats.admins.to_string() glyph="shield" tone="stat-card__value--red" />
                <StatCard label="Agents" value=stats.agents.to_string() glyph="check-circle" tone="stat-card__value--blue" />
                <StatCard label="Users" value=stats.regular.to_string() glyph="users" tone="stat-card__value--purple" />
            </div>

            <div class="tabs">
                <button
                    class="tabs__trigger"
                    class:tabs__trigger--active=move || state.get().tab == UsersTab::Users
                    on:click=move |_| state.update(|s| s.tab = UsersTab::Users)
                >
                    "All Users"
                </button>
                <button
                    class="tabs__trigger"
                    class:tabs__trigger--active=move || state.get().tab == UsersTab::Roles
                    on:click=move |_| state.update(|s| s.tab = UsersTab::Roles)
                >
                    "Roles & Permissions"
                </button>
                <button
                    class="tabs__trigger"
                    class:tabs__trigger--active=move || state.get().tab == UsersTab::Departments
                    on:click=move |_| state.update(|s| s.tab = UsersTab::Departments)
                >
                    "Departments"
                </button>
            </div>

            {move || match state.get().tab {
                UsersTab::Users => view! {
                    <div>
                        <div class="card catalog__filters">
                            <div class="search-box">
                                <span class="search-box__icon">{icon("search")}</span>
                                <input
                                    type="text"
                                    placeholder="Search users..."
                                    value=move || state.get().q
                                    on:input=move |ev| {
                                        let q = event_target_value(&ev);
                                        state.update(|s| s.q = q);
                                    }
                                />
                            </div>
                            <select on:change=move |ev| {
                                let role = event_target_value(&ev);
                                state.update(|s| s.role = role);
                            }>
                                {role_options()
                                    .into_iter()
                                    .map(|(value, label)| {
                                        view! {
                                            <option
                                                value=value
                                                selected=move || state.get().role == value
                                            >
                                                {label}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="users__grid">
                            {filtered()
                                .into_iter()
                                .map(|user| view! { <UserCard user=user /> })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
                UsersTab::Roles => view! { <RolesTab /> }.into_any(),
                UsersTab::Departments => view! { <DepartmentsTab /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn UserCard(user: User) -> impl IntoView {
    let status_label = user.status.display_name();
    let is_active = user.status.is_active();

    view! {
        <div class="card user-card">
            <div class="user-card__identity">
                <img class="user-card__avatar" src=user.avatar.clone() alt=user.name.clone() />
                <div>
                    <h3>{user.name.clone()}</h3>
                    <p class="user-card__email">{user.email.clone()}</p>
                </div>
            </div>

            <div class="user-card__rows">
                <div class="user-card__row">
                    <span class="fact__label">"Role"</span>
                    <span class=format!("badge {}", user.role.color())>
                        {user.role.display_name()}
                    </span>
                </div>
                <div class="user-card__row">
                    <span class="fact__label">"Department"</span>
                    <span>{user.department.clone()}</span>
                </div>
                <div class="user-card__row">
                    <span class="fact__label">"Status"</span>
                    <span
                        class="user-card__status"
                        class:user-card__status--inactive=!is_active
                    >
                        {status_label}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RolesTab() -> impl IntoView {
    view! {
        <div class="users__grid">
            {UserRole::all()
                .into_iter()
                .map(|role| {
                    let holders = UserStats::with_role(data::users(), role);
                    view! {
                        <div class="card role-card">
                            <span class=format!("role-card__icon {}", role.color())>
                                {icon("shield")}
                            </span>
                            <h3>{role.display_name()}</h3>
                            <p class="role-card__description">{role.description()}</p>

                            <h4>"Permissions"</h4>
                            <ul class="role-card__permissions">
                                {role
                                    .permissions()
                                    .into_iter()
                                    .map(|permission| view! { <li>{permission}</li> })
                                    .collect_view()}
                            </ul>

                            <div class="role-card__footer">
                                <span class="fact__label">"Users with this role"</span>
                                <span>{holders}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn DepartmentsTab() -> impl IntoView {
    view! {
        <div class="users__grid">
            {departments(data::users())
                .into_iter()
                .map(|department| {
                    let members: Vec<&User> = data::users()
                        .iter()
                        .filter(|u| u.department == department)
                        .collect();
                    let active = members
                        .iter()
                        .filter(|u| u.status == UserStatus::Active)
                        .count();
                    let admins = members.iter().filter(|u| u.role == UserRole::Admin).count();
                    let agents = members.iter().filter(|u| u.role == UserRole::Agent).count();

                    view! {
                        <div class="card department-card">
                            <span class="department-card__icon">{icon("users")}</span>
                            <h3>{department}</h3>
                            <div class="user-card__rows">
                                <div class="user-card__row">
                                    <span class="fact__label">"Total Users"</span>
                                    <span>{members.len()}</span>
                                </div>
                                <div class="user-card__row">
                                    <span class="fact__label">"Active"</span>
                                    <span>{active}</span>
                                </div>
                                <div class="user-card__row">
                                    <span class="fact__label">"Admins"</span>
                                    <span>{admins}</span>
                                </div>
                                <div class="user-card__row">
                                    <span class="fact__label">"Agents"</span>
                                    <span>{agents}</span>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
