mod common;

use common::{attached, detalle, id, resumen};
use retiros_busqueda::client::models::app_state::{BusquedaState, Effect};
use retiros_busqueda::client::models::form::{FormField, FormLayout};
use retiros_busqueda::client::models::messages::{ClickTarget, Message};
use retiros_busqueda::client::models::ui_state::{PanelContent, MSG_NO_RESULTS, MSG_SEARCH_FAILED};
use retiros_busqueda::client::services::debouncer::DebounceTicket;
use retiros_busqueda::common::error::LookupError;

fn type_query(state: &mut BusquedaState, text: &str) -> Option<DebounceTicket> {
    match state.update(Message::SearchInputChanged(text.to_string())) {
        Effect::Debounce(ticket) => Some(ticket),
        Effect::None => None,
        other => panic!("unexpected effect for keystroke: {:?}", other),
    }
}

#[test]
fn short_query_clears_panels_without_request() {
    let mut state = attached();
    state.update(Message::DetailLoaded {
        id: id(1),
        result: Ok(detalle(1, "Clínica Austral", Some("Av. Brasil 100"), false)),
    });
    type_query(&mut state, "cl").expect("two chars schedule a search");
    assert!(state.results.visible);

    for text in ["", "c", "  c  ", "   "] {
        assert!(type_query(&mut state, text).is_none(), "{:?} must not search", text);
        assert!(!state.results.visible);
        assert_eq!(state.results.content, PanelContent::Blank);
        assert!(state.info.is_none());
        assert!(!state.has_pending_search());
    }
}

#[test]
fn keystroke_shows_loading_before_dispatch() {
    let mut state = attached();
    let ticket = type_query(&mut state, "  ma ").expect("scheduled");
    assert_eq!(ticket.query(), "ma");
    assert!(state.results.visible);
    assert_eq!(state.results.content, PanelContent::Loading);
    assert!(state.has_pending_search());
}

#[test]
fn burst_of_keystrokes_dispatches_only_the_last_query() {
    let mut state = attached();
    let tickets: Vec<DebounceTicket> = ["ma", "mar", "mari", "maria"]
        .iter()
        .map(|q| type_query(&mut state, q).expect("scheduled"))
        .collect();

    let searches: Vec<String> = tickets
        .into_iter()
        .filter_map(|t| match state.update(Message::DebounceElapsed(t)) {
            Effect::Search(q) => Some(q),
            _ => None,
        })
        .collect();

    assert_eq!(searches, vec!["maria".to_string()]);
}

#[test]
fn ticket_fires_once() {
    let mut state = attached();
    let ticket = type_query(&mut state, "vet").expect("scheduled");
    assert_eq!(
        state.update(Message::DebounceElapsed(ticket.clone())),
        Effect::Search("vet".to_string())
    );
    assert_eq!(state.update(Message::DebounceElapsed(ticket)), Effect::None);
}

#[test]
fn short_query_supersedes_pending_dispatch() {
    let mut state = attached();
    let ticket = type_query(&mut state, "ma").expect("scheduled");
    assert!(type_query(&mut state, "m").is_none());
    assert_eq!(state.update(Message::DebounceElapsed(ticket)), Effect::None);
}

#[test]
fn empty_results_show_message_and_no_entries() {
    let mut state = attached();
    type_query(&mut state, "zzz");
    state.update(Message::SearchCompleted(Ok(vec![])));
    assert_eq!(state.results.content, PanelContent::NoResults);
    assert_eq!(state.results.status_text(), Some(MSG_NO_RESULTS));
    assert!(state.results.entries().is_empty());
}

#[test]
fn results_replace_previous_entries() {
    let mut state = attached();
    type_query(&mut state, "vet");
    state.update(Message::SearchCompleted(Ok(vec![
        resumen(1, "Vet Uno", true, "Calle 1"),
        resumen(2, "Vet Dos", false, "Calle 2"),
    ])));
    assert_eq!(state.results.entries().len(), 2);

    state.update(Message::SearchCompleted(Ok(vec![resumen(3, "Vet Tres", true, "Calle 3")])));
    let ids: Vec<u64> = state.results.entries().iter().map(|e| e.id.0).collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn last_arrived_response_wins() {
    let mut state = attached();
    type_query(&mut state, "ma");
    type_query(&mut state, "mar");
    // "mar" answered first, the older "ma" request arrives afterwards
    state.update(Message::SearchCompleted(Ok(vec![resumen(2, "Mario", true, "x")])));
    state.update(Message::SearchCompleted(Ok(vec![resumen(1, "Manuel", true, "y")])));
    assert_eq!(state.results.entries()[0].nombre, "Manuel");
}

#[test]
fn transport_failure_shows_fixed_message() {
    let mut state = attached();
    type_query(&mut state, "vet");
    state.update(Message::SearchCompleted(Err(LookupError::Transport(
        "connection refused".into(),
    ))));
    assert_eq!(state.results.content, PanelContent::Error(MSG_SEARCH_FAILED.to_string()));

    // next keystroke starts fresh
    type_query(&mut state, "veter");
    assert_eq!(state.results.content, PanelContent::Loading);
}

#[test]
fn server_error_is_shown_verbatim() {
    let mut state = attached();
    type_query(&mut state, "vet");
    state.update(Message::SearchCompleted(Err(LookupError::Server(
        "Error al realizar la búsqueda".into(),
    ))));
    assert_eq!(state.results.status_text(), Some("Error al realizar la búsqueda"));
}

#[test]
fn clicking_a_result_requests_its_detail() {
    let mut state = attached();
    assert_eq!(state.update(Message::ResultSelected(id(42))), Effect::FetchDetail(id(42)));
}

#[test]
fn selection_populates_form_and_hides_panel() {
    let mut state = attached();
    type_query(&mut state, "aus");
    state.update(Message::SearchCompleted(Ok(vec![resumen(5, "Clínica Austral", true, "Av. Brasil 100")])));

    state.update(Message::DetailLoaded {
        id: id(5),
        result: Ok(detalle(5, "Clínica Austral", Some("Av. Brasil 100"), false)),
    });

    assert_eq!(state.solicitante_id, Some(id(5)));
    assert_eq!(state.query, "Clínica Austral");
    assert!(!state.results.visible);
    assert_eq!(
        state.solicitante_label.as_deref(),
        Some("Clínica Austral - Médico Veterinario (Viña del Mar)")
    );
    let card = state.info.as_ref().expect("detail card");
    assert_eq!(card.nombre, "Clínica Austral");
    assert_eq!(card.zona, "Viña del Mar");
    assert_eq!(state.selected.as_ref().map(|d| d.id), Some(id(5)));
}

#[test]
fn selecting_second_entity_replaces_first() {
    let mut state = attached();
    state.update(Message::DetailLoaded {
        id: id(1),
        result: Ok(detalle(1, "Primero", Some("Calle Uno 1"), false)),
    });
    state.update(Message::DetailLoaded {
        id: id(2),
        result: Ok(detalle(2, "Segundo", None, false)),
    });

    assert_eq!(state.solicitante_id, Some(id(2)));
    let selected = state.selected.as_ref().expect("selected");
    assert_eq!(selected.id, id(2));
    assert_eq!(selected.nombre, "Segundo");
    assert_eq!(state.info.as_ref().map(|c| c.nombre.as_str()), Some("Segundo"));
    // nothing of the first selection survives in the address field
    let autofill = state.autofill.as_ref().expect("autofill");
    assert!(!autofill.usar_direccion);
    assert_eq!(autofill.field.value, "");
}

#[test]
fn detail_failure_notifies_and_keeps_selection() {
    let mut state = attached();
    state.update(Message::DetailLoaded {
        id: id(1),
        result: Ok(detalle(1, "Primero", Some("Calle Uno 1"), false)),
    });

    state.update(Message::DetailLoaded {
        id: id(9),
        result: Err(LookupError::Server("Solicitante no encontrado".into())),
    });
    assert_eq!(
        state.notification.as_deref(),
        Some("Error al cargar solicitante: Solicitante no encontrado")
    );
    assert_eq!(state.solicitante_id, Some(id(1)));
    assert_eq!(state.selected.as_ref().map(|d| d.id), Some(id(1)));

    state.update(Message::DismissNotification);
    state.update(Message::DetailLoaded {
        id: id(9),
        result: Err(LookupError::Decode("expected value".into())),
    });
    assert_eq!(
        state.notification.as_deref(),
        Some("Error al cargar los datos del solicitante")
    );
    assert_eq!(state.solicitante_id, Some(id(1)));
}

#[test]
fn detail_failure_without_prior_selection_leaves_it_empty() {
    let mut state = attached();
    state.update(Message::DetailLoaded {
        id: id(3),
        result: Err(LookupError::Transport("timeout".into())),
    });
    assert!(state.selected.is_none());
    assert!(state.solicitante_id.is_none());
    assert!(state.notification.is_some());
}

#[test]
fn outside_click_hides_panel_inside_click_does_not() {
    let mut state = attached();
    type_query(&mut state, "vet");
    assert!(state.results.visible);

    state.update(Message::Clicked(ClickTarget::SearchInput));
    assert!(state.results.visible);
    state.update(Message::Clicked(ClickTarget::ResultsPanel));
    assert!(state.results.visible);

    state.update(Message::Clicked(ClickTarget::Outside));
    assert!(!state.results.visible);
}

#[test]
fn late_results_do_not_reopen_hidden_panel() {
    let mut state = attached();
    type_query(&mut state, "vet");
    state.update(Message::Clicked(ClickTarget::Outside));
    state.update(Message::SearchCompleted(Ok(vec![resumen(1, "Vet", true, "x")])));
    assert!(!state.results.visible);
    assert_eq!(state.results.entries().len(), 1);
}

#[test]
fn widget_needs_search_input_and_selection_field() {
    assert!(BusquedaState::attach(FormLayout::full().without(FormField::SearchInput)).is_none());
    assert!(BusquedaState::attach(FormLayout::full().without(FormField::SolicitanteSelect)).is_none());

    let state = BusquedaState::attach(FormLayout::full().without(FormField::DireccionTextarea))
        .expect("address pair is optional");
    assert!(state.autofill.is_none());
}

#[test]
fn submit_validates_selection_and_address() {
    let mut state = attached();
    assert_eq!(state.update(Message::SubmitSolicitud), Effect::None);
    let entry = state.logger.last().expect("error entry");
    assert!(entry.message.contains("Debe seleccionar un solicitante"));
    assert!(entry.message.contains("Debe proporcionar una dirección de retiro"));

    state.update(Message::DetailLoaded {
        id: id(1),
        result: Ok(detalle(1, "Primero", Some("Calle Uno 1"), false)),
    });
    assert!(matches!(
        state.update(Message::SubmitSolicitud),
        Effect::ClearLogAfter { .. }
    ));
    let entry = state.logger.last().expect("success entry");
    assert!(entry.message.contains("Calle Uno 1"));

    state.update(Message::ClearLog);
    assert!(state.logger.is_empty());
}

#[test]
fn cloned_state_keeps_pending_search() {
    let mut state = attached();
    let ticket = type_query(&mut state, "vet").expect("scheduled");

    let mut copy = state.clone();
    assert!(copy.has_pending_search());
    assert_eq!(
        copy.update(Message::DebounceElapsed(ticket.clone())),
        Effect::Search("vet".to_string())
    );
    assert_eq!(copy.update(Message::DebounceElapsed(ticket.clone())), Effect::None);

    // the original is independent of the copy
    assert_eq!(
        state.update(Message::DebounceElapsed(ticket)),
        Effect::Search("vet".to_string())
    );
}

#[test]
fn checkbox_press_hides_open_panel() {
    let mut state = attached();
    type_query(&mut state, "vet");
    assert!(state.results.visible);

    state.update(Message::UsarDireccionToggled(true));
    assert!(!state.results.visible);

    type_query(&mut state, "veter");
    state.update(Message::UsarDireccionToggled(false));
    assert!(!state.results.visible);
}

#[test]
fn submit_press_hides_open_panel() {
    let mut state = attached();
    type_query(&mut state, "vet");
    state.update(Message::SubmitSolicitud);
    assert!(!state.results.visible);
}

#[test]
fn address_field_press_counts_as_outside() {
    let mut state = attached();
    type_query(&mut state, "vet");
    // the address field reports its presses as outside clicks
    state.update(Message::Clicked(ClickTarget::Outside));
    assert!(!state.results.visible);
    state.update(Message::DireccionChanged("Calle 2".to_string()));
    assert!(!state.results.visible);
}

#[test]
fn stale_log_timer_keeps_newer_entry() {
    let mut state = attached();
    state.update(Message::DetailLoaded {
        id: id(1),
        result: Ok(detalle(1, "Primero", Some("Calle Uno 1"), false)),
    });
    let first = match state.update(Message::SubmitSolicitud) {
        Effect::ClearLogAfter { generation, .. } => generation,
        other => panic!("expected a clear timer, got {:?}", other),
    };

    state.update(Message::UsarDireccionToggled(false));
    assert_eq!(state.update(Message::SubmitSolicitud), Effect::None);
    assert_eq!(state.logger.len(), 1);

    state.update(Message::LogExpired(first));
    let entry = state.logger.last().expect("error entry survives the old timer");
    assert_eq!(entry.message, "Debe proporcionar una dirección de retiro");
}

#[test]
fn current_log_timer_clears_entry() {
    let mut state = attached();
    state.update(Message::DetailLoaded {
        id: id(1),
        result: Ok(detalle(1, "Primero", Some("Calle Uno 1"), false)),
    });
    let Effect::ClearLogAfter { generation, delay } = state.update(Message::SubmitSolicitud) else {
        panic!("expected a clear timer");
    };
    assert_eq!(delay, retiros_busqueda::client::models::app_state::LOG_CLEAR_DELAY);
    state.update(Message::LogExpired(generation));
    assert!(state.logger.is_empty());
}
