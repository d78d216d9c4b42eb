use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::actors::LedgerHandle;
use crate::dto::{
    BalanceReply, CreateUserRequest, DepositReceipt, DepositRequest, GetBalanceRequest, RpcReply,
    SendMoneyRequest, TransferReceipt, UserProfile, WithdrawRequest, WithdrawalReceipt
};

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn create_user(
    State(ledger): State<LedgerHandle>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>
) -> Json<RpcReply<UserProfile>> {
    match payload {
        Ok(Json(request)) => Json(ledger.create_user(request).await.into()),
        Err(rejection) => Json(RpcReply::failure(invalid_request(rejection)))
    }
}

pub async fn deposit(
    State(ledger): State<LedgerHandle>,
    payload: Result<Json<DepositRequest>, JsonRejection>
) -> Json<RpcReply<DepositReceipt>> {
    match payload {
        Ok(Json(request)) => Json(ledger.deposit(request).await.into()),
        Err(rejection) => Json(RpcReply::failure(invalid_request(rejection)))
    }
}

pub async fn withdraw(
    State(ledger): State<LedgerHandle>,
    payload: Result<Json<WithdrawRequest>, JsonRejection>
) -> Json<RpcReply<WithdrawalReceipt>> {
    match payload {
        Ok(Json(request)) => Json(ledger.withdraw(request).await.into()),
        Err(rejection) => Json(RpcReply::failure(invalid_request(rejection)))
    }
}

pub async fn get_balance(
    State(ledger): State<LedgerHandle>,
    payload: Result<Json<GetBalanceRequest>, JsonRejection>
) -> Json<BalanceReply> {
    match payload {
        Ok(Json(request)) => Json(ledger.get_balance(request).await.into()),
        Err(rejection) => Json(BalanceReply::failure(invalid_request(rejection)))
    }
}

pub async fn send_money(
    State(ledger): State<LedgerHandle>,
    payload: Result<Json<SendMoneyRequest>, JsonRejection>
) -> Json<RpcReply<TransferReceipt>> {
    match payload {
        Ok(Json(request)) => Json(ledger.send_money(request).await.into()),
        Err(rejection) => Json(RpcReply::failure(invalid_request(rejection)))
    }
}

fn invalid_request(rejection: JsonRejection) -> String {
    tracing::warn!("Malformed request body: {rejection}");
    format!("Invalid request: {}", rejection.body_text())
}
