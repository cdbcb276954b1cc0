use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod states;

pub use events::*;
pub use instructions::*;

#[program]
pub mod fee_collector {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        params: InitializeConfigParams,
    ) -> Result<()> {
        InitializeConfig::handle(ctx, params)
    }

    pub fn register_vault(ctx: Context<RegisterVault>, params: RegisterVaultParams) -> Result<()> {
        RegisterVault::handle(ctx, params)
    }

    pub fn set_vault_details(
        ctx: Context<SetVaultDetails>,
        params: SetVaultDetailsParams,
    ) -> Result<()> {
        SetVaultDetails::handle(ctx, params)
    }

    pub fn add_fee_schema(ctx: Context<AddFeeSchema>, params: AddFeeSchemaParams) -> Result<()> {
        AddFeeSchema::handle(ctx, params)
    }

    pub fn pay_fee(ctx: Context<PayFee>, params: PayFeeParams) -> Result<()> {
        PayFee::handle(ctx, params)
    }

    pub fn withdraw(ctx: Context<Withdraw>, params: WithdrawParams) -> Result<()> {
        Withdraw::handle(ctx, params)
    }

    pub fn set_platform_treasury(
        ctx: Context<SetPlatformTreasury>,
        params: SetPlatformTreasuryParams,
    ) -> Result<()> {
        SetPlatformTreasury::handle(ctx, params)
    }

    pub fn set_total_fee_bps(
        ctx: Context<SetTotalFeeBps>,
        params: SetTotalFeeBpsParams,
    ) -> Result<()> {
        SetTotalFeeBps::handle(ctx, params)
    }

    pub fn query_vault(ctx: Context<QueryVault>, params: QueryVaultParams) -> Result<VaultInfo> {
        QueryVault::handle(ctx, params)
    }

    pub fn query_fee_schema(
        ctx: Context<QueryFeeSchema>,
        params: QueryFeeSchemaParams,
    ) -> Result<Vec<crate::states::FeeShare>> {
        QueryFeeSchema::handle(ctx, params)
    }

    pub fn query_payment(
        ctx: Context<QueryPayment>,
        params: QueryPaymentParams,
    ) -> Result<PaymentInfo> {
        QueryPayment::handle(ctx, params)
    }
}
