/// quick start - minimal example to get started
use pocket_bank_rs::{Account, Earner, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // open an account with 1000 and take the maximum loan
    let mut account = Account::open(Money::from_major(1000));
    account.request_loan(Money::from_major(1000))?;

    // work two shifts and send the pay to the bank
    let mut earner = Earner::new(&account);
    earner.work();
    earner.work();
    let receipt = earner.transfer_to_account(&mut account)?;

    println!(
        "deposited {} with {} toward the loan",
        receipt.deposited, receipt.down_payment
    );

    // print current state
    println!("{}", account.json());

    Ok(())
}
