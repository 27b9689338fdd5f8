use lumen_horizon::{Error, ExtrasError, Problem, TransactionResultCodes};
use lumen_xdr::{
    to_base64, Memo, MuxedAccount, Preconditions, Transaction, TransactionEnvelope,
    TransactionV1Envelope,
};
use serde_json::json;

fn sample_envelope() -> TransactionEnvelope {
    TransactionEnvelope::TxV1(TransactionV1Envelope {
        tx: Transaction {
            source_account: MuxedAccount::Ed25519([1u8; 32]),
            fee: 100,
            seq_num: 3,
            cond: Preconditions::None,
            memo: Memo::None,
            operations: vec![],
        },
        signatures: vec![],
    })
}

fn failed_submission(extras: serde_json::Value) -> Error {
    let problem: Problem = serde_json::from_value(json!({
        "type": "https://lumen.network/errors/transaction_failed",
        "title": "Transaction Failed",
        "status": 400,
        "detail": "The transaction failed when submitted to the network.",
        "extras": extras,
    }))
    .unwrap();
    Error { problem }
}

#[test]
fn envelope_decodes_from_extras() {
    let envelope = sample_envelope();
    let err = failed_submission(json!({ "envelope_xdr": to_base64(&envelope) }));
    assert_eq!(err.envelope().unwrap(), envelope);
}

#[test]
fn missing_extras_report_distinct_conditions() {
    let err = failed_submission(json!({}));
    assert!(matches!(
        err.envelope_xdr(),
        Err(ExtrasError::EnvelopeNotPopulated)
    ));
    assert!(matches!(err.envelope(), Err(ExtrasError::EnvelopeNotPopulated)));
    assert!(matches!(
        err.result_string(),
        Err(ExtrasError::ResultNotPopulated)
    ));
    assert!(matches!(
        err.result_codes(),
        Err(ExtrasError::ResultCodesNotPopulated)
    ));
}

#[test]
fn non_string_extras_are_malformed() {
    let err = failed_submission(json!({ "envelope_xdr": 42, "result_xdr": [1, 2] }));
    assert!(matches!(
        err.envelope_xdr(),
        Err(ExtrasError::Malformed("envelope_xdr"))
    ));
    assert!(matches!(
        err.result_string(),
        Err(ExtrasError::Malformed("result_xdr"))
    ));
}

#[test]
fn unparsable_envelope_is_an_xdr_error() {
    let err = failed_submission(json!({ "envelope_xdr": "not base64!!" }));
    assert!(matches!(err.envelope(), Err(ExtrasError::Xdr(_))));
}

#[test]
fn result_string_passes_through_verbatim() {
    let err = failed_submission(json!({ "result_xdr": "AAAAAAAAAGT/////AAAAAQ==" }));
    assert_eq!(err.result_string().unwrap(), "AAAAAAAAAGT/////AAAAAQ==");
}

#[test]
fn result_codes_deserialize() {
    let err = failed_submission(json!({
        "result_codes": {
            "transaction": "tx_failed",
            "operations": ["op_underfunded", "op_already_exists"]
        }
    }));
    assert_eq!(
        err.result_codes().unwrap(),
        TransactionResultCodes {
            transaction: "tx_failed".into(),
            inner_transaction: String::new(),
            operations: vec!["op_underfunded".into(), "op_already_exists".into()],
        }
    );
}

#[test]
fn malformed_result_codes_are_a_json_error() {
    let err = failed_submission(json!({ "result_codes": "tx_failed" }));
    assert!(matches!(err.result_codes(), Err(ExtrasError::Json(_))));
}

#[test]
fn message_leads_with_the_transaction_code() {
    let err = failed_submission(json!({
        "result_codes": {
            "transaction": "tx_failed",
            "operations": ["op_underfunded"]
        }
    }));
    assert_eq!(
        err.to_string(),
        "horizon error: \"Transaction Failed\" (tx_failed, op_underfunded) \
         - check the problem field for more information"
    );
}

#[test]
fn message_keeps_code_order_across_operations() {
    let err = failed_submission(json!({
        "result_codes": {
            "transaction": "tx_failed",
            "operations": ["op_underfunded", "op_already_exists"]
        }
    }));
    assert_eq!(
        err.to_string(),
        "horizon error: \"Transaction Failed\" \
         (tx_failed, op_underfunded, op_already_exists) \
         - check the problem field for more information"
    );
}

#[test]
fn message_with_no_operation_codes_shows_the_transaction_code_alone() {
    let err = failed_submission(json!({
        "result_codes": { "transaction": "tx_bad_seq" }
    }));
    assert_eq!(
        err.to_string(),
        "horizon error: \"Transaction Failed\" (tx_bad_seq) \
         - check the problem field for more information"
    );
}

#[test]
fn message_omits_codes_when_unavailable() {
    let err = failed_submission(json!({}));
    assert_eq!(
        err.to_string(),
        "horizon error: \"Transaction Failed\" \
         - check the problem field for more information"
    );
}

#[test]
fn problem_fields_roundtrip_through_json() {
    let err = failed_submission(json!({ "result_xdr": "AAAA" }));
    let text = serde_json::to_string(&err.problem).unwrap();
    let back: Problem = serde_json::from_str(&text).unwrap();
    assert_eq!(back, err.problem);
    assert_eq!(back.status, 400);
    assert_eq!(back.type_, "https://lumen.network/errors/transaction_failed");
}
