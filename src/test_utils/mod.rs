//! Helpers shared by the handler and client tests.

#![allow(missing_docs)]

pub(crate) mod fake_service;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use fake_service::{
    FakeFinanceService, budget_record, client_for, transaction_record, unreachable_client,
};
pub(crate) use form::{
    assert_checked_radio, assert_form_input, assert_form_input_with_value, assert_form_select,
    assert_form_submit_button, assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{
    assert_valid_html, must_select_text, parse_html_document, parse_html_fragment,
};
pub(crate) use http::{assert_content_type, assert_hx_redirect, assert_status};
