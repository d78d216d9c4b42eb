use tokio::spawn;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::dto::{
    CreateUserRequest, DepositReceipt, DepositRequest, GetBalanceRequest, SendMoneyRequest,
    TransferReceipt, UserProfile, WithdrawRequest, WithdrawalReceipt
};
use crate::ledger::Ledger;
use crate::models::LedgerError;
use crate::storage::Storage;
use crate::types::Money;

type Reply<T> = oneshot::Sender<Result<T, LedgerError>>;

enum LedgerCommand {
    CreateUser(CreateUserRequest, Reply<UserProfile>),
    Deposit(DepositRequest, Reply<DepositReceipt>),
    Withdraw(WithdrawRequest, Reply<WithdrawalReceipt>),
    GetBalance(GetBalanceRequest, Reply<Money>),
    SendMoney(SendMoneyRequest, Reply<TransferReceipt>)
}

pub struct LedgerActor;

impl LedgerActor {
    /// Moves the ledger onto its own task and returns a handle for submitting commands.
    ///
    /// Commands are applied strictly one at a time in arrival order. The task
    /// finishes once every clone of the returned handle has been dropped and the
    /// queue is drained.
    pub fn spawn<S: Storage>(mut ledger: Ledger<S>, queue_depth: usize) -> (LedgerHandle, JoinHandle<()>) {
        let (sender, mut receiver) = mpsc::channel(queue_depth.max(1));

        let task = spawn(async move {
            while let Some(command) = receiver.recv().await {
                match command {
                    LedgerCommand::CreateUser(request, reply) => respond(reply, ledger.create_user(request)),
                    LedgerCommand::Deposit(request, reply) => respond(reply, ledger.deposit(request)),
                    LedgerCommand::Withdraw(request, reply) => respond(reply, ledger.withdraw(request)),
                    LedgerCommand::GetBalance(request, reply) => respond(reply, ledger.get_balance(request)),
                    LedgerCommand::SendMoney(request, reply) => respond(reply, ledger.send_money(request))
                }
            }

            debug!("Ledger actor stopped, command queue closed");
        });

        (LedgerHandle { sender }, task)
    }
}

fn respond<T>(reply: Reply<T>, result: Result<T, LedgerError>) {
    //NOTE: The caller may have gone away (e.g. a dropped HTTP request); the ledger change still stands.
    if reply.send(result).is_err() {
        warn!("Ledger reply dropped, caller is no longer waiting");
    }
}

/// Cloneable entry point to the ledger actor.
#[derive(Clone)]
pub struct LedgerHandle {
    sender: mpsc::Sender<LedgerCommand>
}

impl LedgerHandle {
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<UserProfile, LedgerError> {
        self.call(|reply| LedgerCommand::CreateUser(request, reply)).await
    }

    pub async fn deposit(&self, request: DepositRequest) -> Result<DepositReceipt, LedgerError> {
        self.call(|reply| LedgerCommand::Deposit(request, reply)).await
    }

    pub async fn withdraw(&self, request: WithdrawRequest) -> Result<WithdrawalReceipt, LedgerError> {
        self.call(|reply| LedgerCommand::Withdraw(request, reply)).await
    }

    pub async fn get_balance(&self, request: GetBalanceRequest) -> Result<Money, LedgerError> {
        self.call(|reply| LedgerCommand::GetBalance(request, reply)).await
    }

    pub async fn send_money(&self, request: SendMoneyRequest) -> Result<TransferReceipt, LedgerError> {
        self.call(|reply| LedgerCommand::SendMoney(request, reply)).await
    }

    async fn call<T>(&self, command: impl FnOnce(Reply<T>) -> LedgerCommand) -> Result<T, LedgerError> {
        let (reply, response) = oneshot::channel();

        self.sender.send(command(reply)).await
            .map_err(|_| LedgerError::Unavailable)?;

        response.await.map_err(|_| LedgerError::Unavailable)?
    }
}
