//! Branch collection (1..=3), each branch owning a nested compliance
//! collection (1..=3).

use contracts::domain::a002_restaurant_info::{MAX_BRANCHES, MAX_COMPLIANCE_PER_BRANCH};
use leptos::prelude::*;
use thaw::*;

use super::super::view_model::{BranchForm, RestaurantInfoVm};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

#[component]
pub fn BranchesSection(vm: RestaurantInfoVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <div class="details-section__header">
                <h4 class="details-section__title">"Branches"</h4>
                <span class="details-section__hint">
                    {move || {
                        format!("{} of {}", vm.branches.with(|arr| arr.len()), MAX_BRANCHES)
                    }}
                </span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| vm.branch_add()
                    disabled=Signal::derive(move || !vm.branches.with(|arr| arr.can_add()))
                >
                    {icon("plus")}
                    " Add branch"
                </Button>
            </div>

            {move || {
                let can_remove = vm.branches.with(|arr| arr.can_remove());
                vm.branches
                    .get()
                    .rows()
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(bi, row)| {
                        let branch = row.value;
                        view! {
                            <div class="array-row array-row--group">
                                {branch_header(vm, bi, &branch, row.editing, can_remove)}
                                <ComplianceList vm=vm branch_index=bi branch=branch.clone() />
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn branch_header(
    vm: RestaurantInfoVm,
    bi: usize,
    branch: &BranchForm,
    editing: bool,
    can_remove: bool,
) -> AnyView {
    if editing {
        let name = branch.name.clone();
        let code = branch.code.clone();
        view! {
            <div class="array-row__fields">
                <div class="details-grid--3col">
                    <div class="form__group">
                        <label class="form__label">"Branch name"</label>
                        <input
                            class="form__input"
                            type="text"
                            prop:value=name
                            on:input=move |ev| {
                                vm.branch_update(bi, |b| b.name = event_target_value(&ev))
                            }
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Branch code"</label>
                        <input
                            class="form__input"
                            type="text"
                            prop:value=code
                            on:input=move |ev| {
                                vm.branch_update(bi, |b| b.code = event_target_value(&ev))
                            }
                        />
                    </div>
                </div>
                <div class="array-row__actions">
                    <button
                        class="button button--icon"
                        title="Save branch"
                        on:click=move |_| vm.branch_save(bi)
                    >
                        {icon("check")}
                    </button>
                    <button
                        class="button button--icon"
                        title="Remove branch"
                        disabled=!can_remove
                        on:click=move |_| vm.branch_remove(bi)
                    >
                        {icon("delete")}
                    </button>
                </div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="array-row__fields">
                <span class="array-row__text">
                    {format!("{} ({})", branch.name, branch.code)}
                </span>
                <div class="array-row__actions">
                    <button
                        class="button button--icon"
                        title="Edit branch"
                        on:click=move |_| vm.branch_edit(bi)
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="button button--icon"
                        title="Remove branch"
                        disabled=!can_remove
                        on:click=move |_| vm.branch_remove(bi)
                    >
                        {icon("delete")}
                    </button>
                </div>
            </div>
        }
        .into_any()
    }
}

#[component]
fn ComplianceList(vm: RestaurantInfoVm, branch_index: usize, branch: BranchForm) -> impl IntoView {
    let bi = branch_index;
    let can_add = branch.compliance.can_add();
    let can_remove = branch.compliance.can_remove();

    view! {
        <div class="array-row__nested">
            <div class="details-section__header">
                <span class="details-section__subtitle">"Compliance"</span>
                <span class="details-section__hint">
                    {format!("{} of {}", branch.compliance.len(), MAX_COMPLIANCE_PER_BRANCH)}
                </span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| vm.compliance_add(bi)
                    disabled=!can_add
                >
                    {icon("plus")}
                    " Add license"
                </Button>
            </div>
            {branch
                .compliance
                .rows()
                .iter()
                .cloned()
                .enumerate()
                .map(|(ci, row)| {
                    let detail = row.value;
                    if row.editing {
                        view! {
                            <div class="array-row array-row--editing">
                                <div class="details-grid--3col">
                                    <div class="form__group">
                                        <label class="form__label">"License type"</label>
                                        <input
                                            class="form__input"
                                            type="text"
                                            prop:value=detail.license_type.clone()
                                            on:input=move |ev| {
                                                vm.compliance_update(
                                                    bi,
                                                    ci,
                                                    |c| c.license_type = event_target_value(&ev),
                                                )
                                            }
                                        />
                                    </div>
                                    <div class="form__group">
                                        <label class="form__label">"License number"</label>
                                        <input
                                            class="form__input"
                                            type="text"
                                            prop:value=detail.license_number.clone()
                                            on:input=move |ev| {
                                                vm.compliance_update(
                                                    bi,
                                                    ci,
                                                    |c| c.license_number = event_target_value(&ev),
                                                )
                                            }
                                        />
                                    </div>
                                    <div class="form__group">
                                        <label class="form__label">"Valid from"</label>
                                        <input
                                            class="form__input"
                                            type="date"
                                            prop:value=detail.valid_from.clone()
                                            on:input=move |ev| {
                                                vm.compliance_update(
                                                    bi,
                                                    ci,
                                                    |c| c.valid_from = event_target_value(&ev),
                                                )
                                            }
                                        />
                                    </div>
                                    <div class="form__group">
                                        <label class="form__label">"Valid till"</label>
                                        <input
                                            class="form__input"
                                            type="date"
                                            prop:value=detail.valid_till.clone()
                                            on:input=move |ev| {
                                                vm.compliance_update(
                                                    bi,
                                                    ci,
                                                    |c| c.valid_till = event_target_value(&ev),
                                                )
                                            }
                                        />
                                    </div>
                                </div>
                                <div class="array-row__actions">
                                    <button
                                        class="button button--icon"
                                        title="Save license"
                                        on:click=move |_| vm.compliance_save(bi, ci)
                                    >
                                        {icon("check")}
                                    </button>
                                    <button
                                        class="button button--icon"
                                        title="Remove license"
                                        disabled=!can_remove
                                        on:click=move |_| vm.compliance_remove(bi, ci)
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="array-row">
                                <span class="array-row__text">
                                    {format!(
                                        "{} {} · {} to {}",
                                        detail.license_type,
                                        detail.license_number,
                                        format_date(&detail.valid_from),
                                        format_date(&detail.valid_till),
                                    )}
                                </span>
                                <div class="array-row__actions">
                                    <button
                                        class="button button--icon"
                                        title="Edit license"
                                        on:click=move |_| vm.compliance_edit(bi, ci)
                                    >
                                        {icon("edit")}
                                    </button>
                                    <button
                                        class="button button--icon"
                                        title="Remove license"
                                        disabled=!can_remove
                                        on:click=move |_| vm.compliance_remove(bi, ci)
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                })
                .collect_view()}
        </div>
    }
}
