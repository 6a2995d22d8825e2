//! Rendering of a resource panel: form, search bar, table, pagination and
//! the detail dialog.

use common::resource::{
    FieldKind, FieldSpec, FormMode, Operation, PageImage, PageItem, Phase, Resource,
};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::detail::detail_dialog;
use super::helpers::{cell, input_files, stored_image_urls};
use super::messages::Msg;
use super::state::ResourceComponent;

type Link<R> = Scope<ResourceComponent<R>>;

pub fn view<R: Resource>(component: &ResourceComponent<R>, ctx: &Context<ResourceComponent<R>>) -> Html {
    let link = ctx.link();
    let config = component.state.config();
    let heading = ctx
        .props()
        .heading
        .clone()
        .unwrap_or_else(|| AttrValue::from(config.plural));

    html! {
        <section class="resource-panel">
            <h2>{ heading }</h2>
            { build_page_image(component, link) }
            {
                if component.state.form_available() {
                    build_form(component, link)
                } else {
                    html! {}
                }
            }
            {
                if config.is_singleton() {
                    html! {}
                } else {
                    html! {
                        <>
                            { build_search_bar(component, link) }
                            { build_table(component, link) }
                            { build_pagination(component, link) }
                        </>
                    }
                }
            }
            { detail_dialog(component, ctx) }
        </section>
    }
}

fn build_form<R: Resource>(component: &ResourceComponent<R>, link: &Link<R>) -> Html {
    let state = &component.state;
    let config = state.config();
    let busy = state.phase() == Phase::Submitting;
    let reading = state.is_reading();
    let editing = state.mode().is_edit();
    let submit_label = match (busy, reading, state.mode()) {
        (true, _, _) => "Saving...".to_string(),
        (false, true, _) => "Reading files...".to_string(),
        (false, false, FormMode::Create) if state.collects_rows() => format!("Submit {}", config.plural),
        (false, false, FormMode::Create) => format!("Create {}", config.label),
        (false, false, FormMode::Edit { .. }) => format!("Update {}", config.label),
    };

    let onsubmit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Submit
    });

    let fields = if state.collects_rows() {
        build_rows(component, link)
    } else {
        html! {
            <>{ for config.schema.fields().iter().map(|field| build_field(component, link, field, 0)) }</>
        }
    };
    let page_image_input = match (&config.page_image, state.mode()) {
        (Some(image), FormMode::Create) => build_page_image_input(component, link, image),
        _ => html! {},
    };

    html! {
        <form class="resource-form" onsubmit={onsubmit}>
            { page_image_input }
            { fields }
            <div class="form-actions">
                <button type="submit" class="btn primary" disabled={busy || reading}>{ submit_label }</button>
                {
                    if editing && !config.is_singleton() {
                        html! {
                            <button type="button" class="btn" onclick={link.callback(|_| Msg::Reset)}>
                                {"Cancel"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </form>
    }
}

/// One block of value fields per batch row, then the file fields once.
fn build_rows<R: Resource>(component: &ResourceComponent<R>, link: &Link<R>) -> Html {
    let config = component.state.config();
    let rows = component.state.form().row_count();

    html! {
        <>
            { for (0..rows).map(|row| html! {
                <fieldset class="batch-row" key={row}>
                    { for config.schema.value_fields().map(|field| build_field(component, link, field, row)) }
                    {
                        if row > 0 {
                            html! {
                                <button type="button" class="btn danger" onclick={link.callback(move |_| Msg::RemoveRow(row))}>
                                    <i class="fa fa-trash"></i>{" Remove"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </fieldset>
            }) }
            { for config.schema.file_fields().map(|field| build_field(component, link, field, 0)) }
            <button type="button" class="btn" onclick={link.callback(|_| Msg::AddRow)}>
                <i class="fa fa-plus"></i>{" Add more"}
            </button>
        </>
    }
}

fn build_field<R: Resource>(
    component: &ResourceComponent<R>,
    link: &Link<R>,
    field: &FieldSpec,
    row: usize,
) -> Html {
    let form = component.state.form();
    let name = field.name.to_string();
    let value = form.row_value(row, field.name).to_string();

    let control = match field.kind {
        FieldKind::Text | FieldKind::Number => {
            let oninput = link.callback(move |event: InputEvent| {
                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                Msg::SetValue {
                    row,
                    field: name.clone(),
                    value: input.value(),
                }
            });
            html! {
                <input
                    type={field.html_input_type()}
                    name={field.name}
                    value={value}
                    required={field.required}
                    oninput={oninput}
                />
            }
        }
        FieldKind::LongText => {
            let oninput = link.callback(move |event: InputEvent| {
                let input: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
                Msg::SetValue {
                    row,
                    field: name.clone(),
                    value: input.value(),
                }
            });
            html! {
                <textarea name={field.name} rows="4" value={value} required={field.required} oninput={oninput} />
            }
        }
        FieldKind::Enum(options) => {
            let onchange = link.callback(move |event: Event| {
                let select: web_sys::HtmlSelectElement = event.target_unchecked_into();
                Msg::SetValue {
                    row,
                    field: name.clone(),
                    value: select.value(),
                }
            });
            html! {
                <select name={field.name} onchange={onchange}>
                    { for options.iter().map(|option| html! {
                        <option value={*option} selected={*option == value}>{ *option }</option>
                    }) }
                </select>
            }
        }
        FieldKind::Image | FieldKind::ImageList => build_file_field(component, link, field),
    };

    html! {
        <label class="form-field">
            <span>{ field.label }{ if field.required { " *" } else { "" } }</span>
            { control }
        </label>
    }
}

/// File input plus thumbnails: pending previews when files are selected,
/// otherwise the images stored on the bound record.
fn build_file_field<R: Resource>(component: &ResourceComponent<R>, link: &Link<R>, field: &FieldSpec) -> Html {
    let state = &component.state;
    let name = field.name.to_string();
    let onchange = link.callback(move |event: Event| Msg::FilesChosen {
        field: name.clone(),
        files: input_files(&event),
    });

    let pending: Vec<String> = state
        .form()
        .pending(field.name)
        .iter()
        .filter_map(|file| file.preview.clone())
        .collect();
    let shown = if !pending.is_empty() {
        pending
    } else {
        state
            .mode()
            .bound_id()
            .and_then(|id| state.find(id))
            .map(|record| stored_image_urls(&component.app, field, record))
            .unwrap_or_default()
    };

    html! {
        <>
            <input
                key={format!("{}-{}", field.name, component.file_input_epoch)}
                type="file"
                accept="image/*"
                multiple={field.kind == FieldKind::ImageList}
                onchange={onchange}
            />
            <div class="gallery">
                { for shown.into_iter().map(|src| html! { <img class="thumb" src={src} alt={field.label} /> }) }
            </div>
        </>
    }
}

/// Upload control for the page image; only offered with a create request.
fn build_page_image_input<R: Resource>(component: &ResourceComponent<R>, link: &Link<R>, image: &PageImage) -> Html {
    let part = image.part;
    let onchange = link.callback(move |event: Event| Msg::FilesChosen {
        field: part.to_string(),
        files: input_files(&event),
    });
    let previews: Vec<String> = component
        .state
        .form()
        .pending(part)
        .iter()
        .filter_map(|file| file.preview.clone())
        .collect();

    html! {
        <label class="form-field">
            <span>{ format!("Upload {}", image.label) }</span>
            <input
                key={format!("{}-{}", part, component.file_input_epoch)}
                type="file"
                accept="image/*"
                onchange={onchange}
            />
            <div class="gallery">
                { for previews.into_iter().map(|src| html! { <img class="thumb" src={src} alt={image.label} /> }) }
            </div>
        </label>
    }
}

/// The stored page image with its delete action.
fn build_page_image<R: Resource>(component: &ResourceComponent<R>, link: &Link<R>) -> Html {
    let state = &component.state;
    let (Some(image), Some(path)) = (&state.config().page_image, state.page_image()) else {
        return html! {};
    };
    let src = component.app.image_url(image.storage_prefix, path);
    let removable = state.supports(Operation::RemovePageImage);

    html! {
        <div class="page-image">
            <img src={src} alt={image.label} />
            {
                if removable {
                    html! {
                        <button class="btn danger" disabled={state.phase().is_busy()}
                            onclick={link.callback(|_| Msg::RemovePageImage)}>
                            {"Delete Image"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_search_bar<R: Resource>(component: &ResourceComponent<R>, link: &Link<R>) -> Html {
    let state = &component.state;
    let config = state.config();
    if config.search_fields.is_empty() && config.export.is_none() {
        return html! {};
    }

    let selector = if config.search_fields.len() > 1 {
        let current = state.query().field.clone();
        html! {
            <select onchange={link.callback(|event: Event| {
                let select: web_sys::HtmlSelectElement = event.target_unchecked_into();
                Msg::SearchField(select.value())
            })}>
                { for config.search_fields.iter().map(|name| {
                    let label = config.schema.field(name).map(|field| field.label).unwrap_or(*name);
                    html! {
                        <option value={*name} selected={current == *name}>{ format!("Search by {label}") }</option>
                    }
                }) }
            </select>
        }
    } else {
        html! {}
    };

    let search = if config.search_fields.is_empty() {
        html! {}
    } else {
        let field_label = config
            .schema
            .field(&state.query().field)
            .map(|field| field.label.to_lowercase())
            .unwrap_or_default();
        html! {
            <input
                type="search"
                placeholder={format!("Enter {field_label}")}
                value={state.query().text.clone()}
                oninput={link.callback(|event: InputEvent| {
                    let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                    Msg::SearchText(input.value())
                })}
            />
        }
    };

    let export = if config.export.is_some() {
        html! {
            <button class="btn" onclick={link.callback(|_| Msg::Export)}>{"Export CSV"}</button>
        }
    } else {
        html! {}
    };

    html! {
        <div class="search-bar">
            { selector }
            { search }
            { export }
        </div>
    }
}

fn build_table<R: Resource>(component: &ResourceComponent<R>, link: &Link<R>) -> Html {
    let state = &component.state;
    let config = state.config();

    if state.phase() == Phase::Loading && !state.has_loaded() {
        return html! { <p class="muted">{ format!("Loading {}...", config.plural.to_lowercase()) }</p> };
    }

    let page = state.current_page();
    if page.items.is_empty() {
        return html! { <p class="muted">{ format!("No {} found.", config.plural.to_lowercase()) }</p> };
    }

    let can_edit = state.supports(Operation::Update);
    let can_delete = state.supports(Operation::Delete);
    let busy = state.phase().is_busy();
    let columns: Vec<&FieldSpec> = config.schema.listed().collect();

    let rows = page.items.iter().enumerate().map(|(index, record)| {
        let id = record.id().to_string();
        let view_id = id.clone();
        let edit_id = id.clone();
        let delete_id = id.clone();
        html! {
            <tr key={id}>
                <td>{ page.offset + index + 1 }</td>
                { for columns.iter().map(|field| html! { <td>{ cell(&component.app, field, *record) }</td> }) }
                <td class="actions">
                    <button class="icon-btn" title="View" onclick={link.callback(move |_| Msg::View(view_id.clone()))}>
                        <i class="fa fa-eye"></i>
                    </button>
                    {
                        if can_edit {
                            html! {
                                <button class="icon-btn" title="Edit" disabled={busy}
                                    onclick={link.callback(move |_| Msg::Edit(edit_id.clone()))}>
                                    <i class="fa fa-pen"></i>
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if can_delete {
                            html! {
                                <button class="icon-btn danger" title="Delete" disabled={busy}
                                    onclick={link.callback(move |_| Msg::Remove(delete_id.clone()))}>
                                    <i class="fa fa-trash"></i>
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </td>
            </tr>
        }
    });

    html! {
        <table class="resource-table">
            <thead>
                <tr>
                    <th>{"#"}</th>
                    { for columns.iter().map(|field| html! { <th>{ field.label }</th> }) }
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                { for rows }
            </tbody>
        </table>
    }
}

fn build_pagination<R: Resource>(component: &ResourceComponent<R>, link: &Link<R>) -> Html {
    let page = component.state.current_page();
    if page.total <= 1 {
        return html! {};
    }
    let previous = page.number - 1;
    let next = page.number + 1;

    html! {
        <nav class="pagination">
            <button class="btn" disabled={!page.has_previous()} onclick={link.callback(move |_| Msg::GoToPage(previous))}>
                {"Previous"}
            </button>
            { for page.numbers.iter().map(|item| match *item {
                PageItem::Number(number) => html! {
                    <button
                        class={classes!("btn", (number == page.number).then_some("active"))}
                        onclick={link.callback(move |_| Msg::GoToPage(number))}
                    >
                        { number }
                    </button>
                },
                PageItem::Gap => html! { <span class="gap">{"…"}</span> },
            }) }
            <button class="btn" disabled={!page.has_next()} onclick={link.callback(move |_| Msg::GoToPage(next))}>
                {"Next"}
            </button>
        </nav>
    }
}
