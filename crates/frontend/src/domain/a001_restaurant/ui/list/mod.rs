//! Admin list of restaurants: search, sort, selection, bulk lifecycle
//! operations with local reconciliation (no refetch after writes).

pub mod state;

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::Utc;
use contracts::domain::a001_restaurant::{DeleteMode, RecordStatus, Restaurant};
use contracts::domain::common::AggregateId;
use contracts::shared::forms::draft;
use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::create_state;
use super::details::RestaurantDetails;
use crate::domain::a001_restaurant::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, sort_indicator, sort_list, Searchable, Sortable};

#[derive(Clone, Debug, PartialEq)]
struct RestaurantRow {
    id: String,
    name: String,
    owner: String,
    category: String,
    city: String,
    status: RecordStatus,
    is_active: bool,
    updated_at: String,
    updated_raw: String,
}

impl From<&Restaurant> for RestaurantRow {
    fn from(r: &Restaurant) -> Self {
        Self {
            id: r.id.as_string(),
            name: r.restaurant.name.clone(),
            owner: r.restaurant.owner_name.clone(),
            category: r.restaurant.category.clone(),
            city: r.location.city.clone(),
            status: r.status,
            is_active: r.is_active,
            updated_at: format_datetime(&r.metadata.updated_at.to_rfc3339()),
            updated_raw: r.metadata.updated_at.to_rfc3339(),
        }
    }
}

impl Searchable for RestaurantRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.owner.to_lowercase().contains(filter)
            || self.category.to_lowercase().contains(filter)
            || self.city.to_lowercase().contains(filter)
    }
}

impl Sortable for RestaurantRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "city" => self.city.to_lowercase().cmp(&other.city.to_lowercase()),
            "category" => self
                .category
                .to_lowercase()
                .cmp(&other.category.to_lowercase()),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            "updated_at" => self.updated_raw.cmp(&other.updated_raw),
            _ => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

#[component]
pub fn RestaurantList() -> impl IntoView {
    let state = create_state();
    let records: RwSignal<Vec<Restaurant>> = RwSignal::new(Vec::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let busy = RwSignal::new(false);
    // None: table view. Some(None): new record. Some(Some(id)): edit.
    let editing: RwSignal<Option<Option<String>>> = RwSignal::new(None);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(list) => {
                    records.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Failed to load restaurants: {}", e))),
            }
        });
    };
    fetch();

    let rows = Memo::new(move |_| {
        let mut rows: Vec<RestaurantRow> =
            records.with(|list| list.iter().map(RestaurantRow::from).collect());
        state.filter.with(|f| filter_list(&mut rows, f));
        sort_list(
            &mut rows,
            &state.sort_field.get(),
            state.sort_ascending.get(),
        );
        rows
    });

    let toggle_sort = move |field: &'static str| {
        if state.sort_field.get_untracked() == field {
            state.sort_ascending.update(|a| *a = !*a);
        } else {
            state.sort_field.set(field.to_string());
            state.sort_ascending.set(true);
        }
    };

    // Write failures are transient: the message clears itself, the user
    // stays on the list and retries manually.
    let flash_error = move |message: String| {
        error.set(Some(message));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(5_000).await;
            error.set(None);
        });
    };

    let toggle_select = move |id: String, checked: bool| {
        state.selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    // Delete dispatches by status: drafts never went live, so they are
    // removed outright; published records only lose their activity flag.
    // Per-id calls run concurrently; the local list is reconciled from
    // the ids that succeeded.
    let run_delete = move |ids: Vec<String>| {
        if ids.is_empty() {
            return;
        }
        let confirmed = window()
            .confirm_with_message(&format!("Delete {} restaurant(s)?", ids.len()))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let targets: Vec<(String, DeleteMode)> = records.with_untracked(|list| {
            list.iter()
                .filter(|r| ids.contains(&r.id.as_string()))
                .map(|r| (r.id.as_string(), DeleteMode::for_status(r.status)))
                .collect()
        });
        busy.set(true);
        spawn_local(async move {
            let now = Utc::now();
            let outcomes = join_all(targets.into_iter().map(|(id, mode)| async move {
                let ok = match mode {
                    DeleteMode::Hard => api::delete_hard(&id).await.is_ok(),
                    DeleteMode::Soft => api::patch_activity(&id, false, now).await.is_ok(),
                };
                (id, mode, ok)
            }))
            .await;

            let mut hard_ok = Vec::new();
            let mut soft_ok = Vec::new();
            let mut any_failed = false;
            for (id, mode, ok) in outcomes {
                if !ok {
                    any_failed = true;
                    continue;
                }
                match mode {
                    DeleteMode::Hard => hard_ok.push(id),
                    DeleteMode::Soft => soft_ok.push(id),
                }
            }

            records.update(|list| {
                draft::remove_ids(list, &hard_ok);
                draft::apply_activity(list, &soft_ok, false, now);
            });
            state.selected.update(|s| {
                for id in hard_ok.iter().chain(soft_ok.iter()) {
                    s.remove(id);
                }
            });
            busy.set(false);
            if any_failed {
                flash_error("Failed to delete restaurant(s)".to_string());
            }
        });
    };

    // Restore flips the activity flag back on. Drafts are skipped: they
    // were never published, there is nothing to restore.
    let run_restore = move |ids: Vec<String>| {
        let targets: Vec<String> = records.with_untracked(|list| {
            list.iter()
                .filter(|r| {
                    ids.contains(&r.id.as_string())
                        && r.status != RecordStatus::Draft
                        && !r.is_active
                })
                .map(|r| r.id.as_string())
                .collect()
        });
        if targets.is_empty() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let now = Utc::now();
            let outcomes = join_all(targets.into_iter().map(|id| async move {
                let ok = api::patch_activity(&id, true, now).await.is_ok();
                (id, ok)
            }))
            .await;

            let restored: Vec<String> = outcomes
                .iter()
                .filter(|(_, ok)| *ok)
                .map(|(id, _)| id.clone())
                .collect();
            let any_failed = outcomes.iter().any(|(_, ok)| !*ok);

            records.update(|list| draft::apply_activity(list, &restored, true, now));
            state.selected.update(|s| {
                for id in &restored {
                    s.remove(id);
                }
            });
            busy.set(false);
            if any_failed {
                flash_error("Failed to restore restaurant(s)".to_string());
            }
        });
    };

    let delete_selected = move |_| {
        run_delete(state.selected.get_untracked().into_iter().collect());
    };
    let restore_selected = move |_| {
        run_restore(state.selected.get_untracked().into_iter().collect());
    };

    view! {
        {move || {
            editing
                .get()
                .map(|id| {
                    view! {
                        <RestaurantDetails
                            id=id
                            on_saved=Callback::new(move |record: Restaurant| {
                                records.update(|list| draft::upsert(list, record));
                            })
                            on_close=Callback::new(move |_| editing.set(None))
                        />
                    }
                })
        }}
        <div
            class="page page--list"
            style=move || {
                if editing.get().is_some() { "display: none;" } else { "" }
            }
        >
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Restaurants"</h1>
                </div>
                <div class="page__header-right">
                    <Input
                        value=state.filter
                        placeholder="Search..."
                        attr:style="width: 220px;"
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        " New restaurant"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=delete_selected
                        disabled=Signal::derive(move || {
                            busy.get() || state.selected.get().is_empty()
                        })
                    >
                        {icon("delete")}
                        {move || format!(" Delete ({})", state.selected.get().len())}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=restore_selected
                        disabled=Signal::derive(move || {
                            busy.get() || state.selected.get().is_empty()
                        })
                    >
                        {icon("restore")}
                        " Restore"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error
                        .get()
                        .map(|e| {
                            view! {
                                <div class="warning-box warning-box--error">
                                    <span class="warning-box__icon">"⚠"</span>
                                    <span class="warning-box__text">{e}</span>
                                </div>
                            }
                        })
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell attr:style="width: 36px;">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            let rows = rows.get();
                                            !rows.is_empty()
                                                && rows
                                                    .iter()
                                                    .all(|r| {
                                                        state.selected.with(|s| s.contains(&r.id))
                                                    })
                                        }
                                        on:change=move |ev| {
                                            if event_target_checked(&ev) {
                                                state
                                                    .selected
                                                    .update(|s| {
                                                        for row in rows.get_untracked() {
                                                            s.insert(row.id);
                                                        }
                                                    });
                                            } else {
                                                state.selected.set(HashSet::new());
                                            }
                                        }
                                    />
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    "Name"
                                    <span
                                        style="cursor: pointer; margin-left: 4px;"
                                        on:click=move |_| toggle_sort("name")
                                    >
                                        {move || {
                                            sort_indicator(
                                                &state.sort_field.get(),
                                                "name",
                                                state.sort_ascending.get(),
                                            )
                                        }}
                                    </span>
                                </TableHeaderCell>
                                <TableHeaderCell>"Owner"</TableHeaderCell>
                                <TableHeaderCell>
                                    "Category"
                                    <span
                                        style="cursor: pointer; margin-left: 4px;"
                                        on:click=move |_| toggle_sort("category")
                                    >
                                        {move || {
                                            sort_indicator(
                                                &state.sort_field.get(),
                                                "category",
                                                state.sort_ascending.get(),
                                            )
                                        }}
                                    </span>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    "City"
                                    <span
                                        style="cursor: pointer; margin-left: 4px;"
                                        on:click=move |_| toggle_sort("city")
                                    >
                                        {move || {
                                            sort_indicator(
                                                &state.sort_field.get(),
                                                "city",
                                                state.sort_ascending.get(),
                                            )
                                        }}
                                    </span>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    "Status"
                                    <span
                                        style="cursor: pointer; margin-left: 4px;"
                                        on:click=move |_| toggle_sort("status")
                                    >
                                        {move || {
                                            sort_indicator(
                                                &state.sort_field.get(),
                                                "status",
                                                state.sort_ascending.get(),
                                            )
                                        }}
                                    </span>
                                </TableHeaderCell>
                                <TableHeaderCell>"Active"</TableHeaderCell>
                                <TableHeaderCell>
                                    "Updated"
                                    <span
                                        style="cursor: pointer; margin-left: 4px;"
                                        on:click=move |_| toggle_sort("updated_at")
                                    >
                                        {move || {
                                            sort_indicator(
                                                &state.sort_field.get(),
                                                "updated_at",
                                                state.sort_ascending.get(),
                                            )
                                        }}
                                    </span>
                                </TableHeaderCell>
                                <TableHeaderCell attr:style="width: 120px;">""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                rows.get()
                                    .into_iter()
                                    .map(|row| {
                                        let id = row.id.clone();
                                        let id_edit = id.clone();
                                        let id_check = id.clone();
                                        let id_delete = id.clone();
                                        let id_restore = id.clone();
                                        let is_selected = state
                                            .selected
                                            .with(|s| s.contains(&id));
                                        let restorable = !row.is_active
                                            && row.status != RecordStatus::Draft;
                                        let name = row.name.clone();
                                        view! {
                                            <TableRow class:table__row--selected=is_selected>
                                                <TableCell>
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=is_selected
                                                        on:change=move |ev| {
                                                            toggle_select(
                                                                id_check.clone(),
                                                                event_target_checked(&ev),
                                                            );
                                                        }
                                                    />
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <a
                                                            href="#"
                                                            class="table__link"
                                                            on:click=move |e| {
                                                                e.prevent_default();
                                                                editing.set(Some(Some(id_edit.clone())));
                                                            }
                                                        >
                                                            {name}
                                                        </a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.owner}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.category}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.city}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class=format!(
                                                            "status-badge status-badge--{}",
                                                            row.status.as_str(),
                                                        )>{row.status.as_str()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {if row.is_active { "Yes" } else { "No" }}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{row.updated_at}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <button
                                                            class="button button--icon"
                                                            title="Delete"
                                                            on:click=move |_| {
                                                                run_delete(vec![id_delete.clone()])
                                                            }
                                                        >
                                                            {icon("delete")}
                                                        </button>
                                                        {restorable
                                                            .then(move || {
                                                                view! {
                                                                    <button
                                                                        class="button button--icon"
                                                                        title="Restore"
                                                                        on:click=move |_| {
                                                                            run_restore(vec![id_restore.clone()])
                                                                        }
                                                                    >
                                                                        {icon("restore")}
                                                                    </button>
                                                                }
                                                            })}
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
