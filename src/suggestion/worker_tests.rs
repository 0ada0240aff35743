//! Tests for the picker worker thread

use std::sync::mpsc;
use std::time::Duration;

use super::*;
use crate::suggestion::catalog;
use crate::suggestion::provider::MockProvider;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

fn spawn(provider: MockProvider) -> (mpsc::Sender<PickerRequest>, mpsc::Receiver<PickerResponse>) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(Box::new(provider), request_rx, response_tx);
    (request_tx, response_rx)
}

#[test]
fn test_fetch_returns_catalog_with_matching_id() {
    let (tx, rx) = spawn(MockProvider::with_payloads(catalog::builtin()));

    tx.send(PickerRequest::Fetch { request_id: 7 }).unwrap();

    match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        PickerResponse::Catalog {
            payloads,
            request_id,
        } => {
            assert_eq!(request_id, 7);
            assert_eq!(payloads.len(), catalog::builtin().len());
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn test_fetch_empty_catalog_is_a_normal_response() {
    let (tx, rx) = spawn(MockProvider::empty());

    tx.send(PickerRequest::Fetch { request_id: 1 }).unwrap();

    match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        PickerResponse::Catalog { payloads, .. } => assert!(payloads.is_empty()),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn test_fetch_failure_answers_with_error() {
    let (tx, rx) = spawn(MockProvider::failing("host denied"));

    tx.send(PickerRequest::Fetch { request_id: 3 }).unwrap();

    match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        PickerResponse::Error { request_id } => assert_eq!(request_id, 3),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn test_resolve_runs_first_of_kind_lookups() {
    let (tx, rx) = spawn(MockProvider::empty());

    // "Dinner with Grace" carries both a contact and a location
    let payload = catalog::builtin()
        .into_iter()
        .find(|p| p.first_contact().is_some() && p.first_location().is_some())
        .unwrap();
    let expected_name = payload.first_contact().unwrap().display_name.clone();

    tx.send(PickerRequest::Resolve {
        payload,
        request_id: 9,
    })
    .unwrap();

    match rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        PickerResponse::Resolved {
            selection,
            request_id,
        } => {
            assert_eq!(request_id, 9);
            assert_eq!(selection.contact.unwrap().display_name, expected_name);
            assert!(selection.location.is_some());
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn test_worker_exits_when_requests_close() {
    let (tx, rx) = spawn(MockProvider::empty());
    drop(tx);

    // Channel closes once the worker loop returns and drops its sender
    assert!(rx.recv_timeout(RECV_TIMEOUT).is_err());
}
