use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use banking_ledger::actors::LedgerActor;
use banking_ledger::ledger::Ledger;
use banking_ledger::rpc::{router, SERVICE_PATH};
use banking_ledger::storage::MemoryStorage;

fn app() -> Router {
    let (ledger, _actor) = LedgerActor::spawn(Ledger::new(Arc::new(MemoryStorage::new())), 32);
    router(ledger)
}

async fn call(app: &Router, method: &str, body: Value) -> Result<Value> {
    call_raw(app, method, body.to_string()).await
}

async fn call_raw(app: &Router, method: &str, body: String) -> Result<Value> {
    let request = Request::post(format!("{SERVICE_PATH}/{method}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))?;

    let response = app.clone().oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn user(email: &str, id_number: &str, currency: &str) -> Value {
    json!({
        "first_name": "Katherine",
        "last_name": "Johnson",
        "email": email,
        "phone_number": "+17575550100",
        "id_number": id_number,
        "residency_country_code": "US",
        "nationality": "American",
        "gender": "female",
        "account_currency": currency,
        "dob": "1918-08-26"
    })
}

async fn create_account(app: &Router, email: &str, id_number: &str, currency: &str) -> Result<u64> {
    let response = call(app, "CreateUser", user(email, id_number, currency)).await?;

    response["data"]["account"]["account_id"].as_u64()
        .ok_or_else(|| anyhow!("CreateUser returned no account id: {response}"))
}

fn amount(value: &Value) -> Option<f64> {
    value["amount"].as_f64()
}

#[tokio::test]
async fn test_create_user_echoes_every_field() -> Result<()> {
    let app = app();
    let request = user("kj@example.com", "123456789", "USD");

    let response = call(&app, "CreateUser", request.clone()).await?;

    assert_eq!(response["error"], "");
    assert_eq!(response["data"]["person_id"], 1);

    for (key, value) in request.as_object().ok_or_else(|| anyhow!("request is not an object"))? {
        assert_eq!(&response["data"][key], value, "field {key}");
    }

    assert_eq!(amount(&response["data"]["account"]["account_balance"]), Some(0.0));
    assert_eq!(response["data"]["account"]["account_balance"]["currency_code"], "USD");

    Ok(())
}

#[tokio::test]
async fn test_create_user_rejections_carry_null_data() -> Result<()> {
    let app = app();
    call(&app, "CreateUser", user("kj@example.com", "1", "USD")).await?;

    let duplicate = call(&app, "CreateUser", user("kj@example.com", "2", "USD")).await?;
    let incomplete = call(&app, "CreateUser", json!({ "first_name": "Only" })).await?;

    assert_eq!(duplicate, json!({ "error": "User with this email or ID number already exists", "data": null }));
    assert_eq!(incomplete, json!({ "error": "Please provide all the mandatory fields!", "data": null }));

    Ok(())
}

#[tokio::test]
async fn test_deposit_withdraw_and_balance_round_trip() -> Result<()> {
    let app = app();
    let account_id = create_account(&app, "kj@example.com", "1", "USD").await?;

    let deposit = call(&app, "Deposit", json!({
        "money": { "amount": 500, "currency_code": "USD" },
        "account_id": account_id,
        "value_date": "15/10/2026",
        "description": "Test deposit"
    })).await?;

    assert_eq!(deposit["error"], "");
    assert_eq!(amount(&deposit["data"]["account_balance"]), Some(500.0));
    assert_eq!(deposit["data"]["transaction_summary"], "Deposited 500 USD. Test deposit");

    let withdraw = call(&app, "Withdraw", json!({
        "money": { "amount": 200.25, "currency_code": "USD" },
        "account_id": account_id,
        "withdrawal_summary": "Test withdrawal"
    })).await?;

    assert_eq!(withdraw["error"], "");
    assert_eq!(amount(&withdraw["data"]["account_balance"]), Some(299.75));
    assert_eq!(withdraw["data"]["description"], "Test withdrawal");
    assert!(withdraw["data"]["transaction_id"].as_u64() > deposit["data"]["transaction_id"].as_u64());

    let balance = call(&app, "GetBalance", json!({ "account_id": account_id })).await?;

    assert_eq!(balance["error"], "");
    assert_eq!(amount(&balance["account_balance"]), Some(299.75));

    Ok(())
}

#[tokio::test]
async fn test_validation_messages_for_amounts_and_currency() -> Result<()> {
    let app = app();
    let account_id = create_account(&app, "kj@example.com", "1", "USD").await?;

    let zero_deposit = call(&app, "Deposit", json!({
        "money": { "amount": 0, "currency_code": "USD" },
        "account_id": account_id
    })).await?;
    let negative_withdrawal = call(&app, "Withdraw", json!({
        "money": { "amount": -10, "currency_code": "USD" },
        "account_id": account_id
    })).await?;
    let mismatch = call(&app, "Deposit", json!({
        "money": { "amount": 10, "currency_code": "EUR" },
        "account_id": account_id
    })).await?;
    let overdraft = call(&app, "Withdraw", json!({
        "money": { "amount": 10, "currency_code": "USD" },
        "account_id": account_id
    })).await?;

    assert_eq!(zero_deposit["error"], "Deposit amount must be greater than 0");
    assert_eq!(negative_withdrawal["error"], "Withdrawal amount must be greater than 0");
    assert_eq!(mismatch["error"], "Currency mismatch between account currency and money sent currency");
    assert_eq!(overdraft["error"], "Insufficient balance");

    for response in [zero_deposit, negative_withdrawal, mismatch, overdraft] {
        assert!(response["data"].is_null());
    }

    Ok(())
}

#[tokio::test]
async fn test_get_balance_of_unknown_account() -> Result<()> {
    let app = app();

    let response = call(&app, "GetBalance", json!({ "account_id": 93999999 })).await?;

    assert_eq!(response, json!({ "error": "Account not found", "account_balance": null }));

    Ok(())
}

#[tokio::test]
async fn test_send_money_moves_funds_between_accounts() -> Result<()> {
    let app = app();
    let sender = create_account(&app, "sender@example.com", "1", "EUR").await?;
    let receiver = create_account(&app, "receiver@example.com", "2", "EUR").await?;

    call(&app, "Deposit", json!({
        "money": { "amount": 1000, "currency_code": "EUR" },
        "account_id": sender
    })).await?;

    let transfer = call(&app, "SendMoney", json!({
        "sender_account_id": sender,
        "receiver_account_id": receiver,
        "money": { "amount": 400, "currency_code": "EUR" },
        "description": "Test transfer"
    })).await?;

    assert_eq!(transfer["error"], "");
    assert!(transfer["data"]["transaction_id"].is_string());
    assert_eq!(amount(&transfer["data"]["sender_new_balance"]), Some(600.0));
    assert_eq!(amount(&transfer["data"]["receiver_new_balance"]), Some(400.0));

    let insufficient = call(&app, "SendMoney", json!({
        "sender_account_id": sender,
        "receiver_account_id": receiver,
        "money": { "amount": 600.01, "currency_code": "EUR" }
    })).await?;
    let missing_sender = call(&app, "SendMoney", json!({
        "sender_account_id": 99999999,
        "receiver_account_id": receiver,
        "money": { "amount": 1, "currency_code": "EUR" }
    })).await?;
    let missing_receiver = call(&app, "SendMoney", json!({
        "sender_account_id": sender,
        "receiver_account_id": 99999999,
        "money": { "amount": 1, "currency_code": "EUR" }
    })).await?;

    assert_eq!(insufficient["error"], "Insufficient balance in sender account");
    assert_eq!(missing_sender["error"], "Sender account not found");
    assert_eq!(missing_receiver["error"], "Receiver account not found");

    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_reported_in_error_envelope() -> Result<()> {
    let app = app();

    let response = call_raw(&app, "Deposit", "{ not json".to_string()).await?;
    let balance = call_raw(&app, "GetBalance", r#"{"account_id": "one"}"#.to_string()).await?;

    assert!(response["error"].as_str().is_some_and(|error| error.starts_with("Invalid request:")));
    assert!(response["data"].is_null());
    assert!(balance["error"].as_str().is_some_and(|error| error.starts_with("Invalid request:")));
    assert!(balance["account_balance"].is_null());

    Ok(())
}

#[tokio::test]
async fn test_health_check() -> Result<()> {
    let request = Request::get("/health").body(Body::empty())?;
    let response = app().oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;

    assert_eq!(body, json!({ "status": "ok" }));

    Ok(())
}
