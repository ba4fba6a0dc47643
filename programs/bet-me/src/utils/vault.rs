use crate::error::BetMeError;
use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Outbound value transfer. Implementations either move the full amount or
/// fail without moving anything.
pub trait ValueTransfer {
    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Pays out of the lamports custodied by the bet account itself.
pub struct LamportVault<'info> {
    vault: AccountInfo<'info>,
    recipients: Vec<AccountInfo<'info>>,
    rent_floor: u64,
}

impl<'info> LamportVault<'info> {
    pub fn new(vault: AccountInfo<'info>, recipients: Vec<AccountInfo<'info>>) -> Result<Self> {
        let rent_floor = Rent::get()?.minimum_balance(vault.data_len());

        Ok(Self {
            vault,
            recipients,
            rent_floor,
        })
    }
}

impl<'info> ValueTransfer for LamportVault<'info> {
    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        let recipient = self
            .recipients
            .iter()
            .find(|account| account.key == to)
            .ok_or(BetMeError::UnknownRecipient)?;

        // never dip into the rent-exempt reserve
        let remaining = self
            .vault
            .lamports()
            .checked_sub(amount)
            .ok_or(BetMeError::InsufficientVaultBalance)?;
        require!(
            remaining >= self.rent_floor,
            BetMeError::InsufficientVaultBalance
        );

        let credited = recipient
            .lamports()
            .checked_add(amount)
            .ok_or(BetMeError::Overflow)?;

        **self.vault.try_borrow_mut_lamports()? = remaining;
        **recipient.try_borrow_mut_lamports()? = credited;

        Ok(())
    }
}

/// Moves `amount` lamports from the signer into the bet account.
pub fn deposit<'info>(
    system: &Program<'info, System>,
    from: &Signer<'info>,
    vault: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_context = CpiContext::new(
        system.to_account_info(),
        system_program::Transfer {
            from: from.to_account_info(),
            to: vault,
        },
    );
    system_program::transfer(cpi_context, amount)
}
