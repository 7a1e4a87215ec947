/// loan lifecycle - cap boundary, rejection messages, exact payoff
use pocket_bank_rs::{Account, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut account = Account::open(Money::from_major(500));

    // the cap is inclusive: exactly twice the balance is allowed
    account.request_loan(Money::from_major(1000))?;
    println!(
        "loan issued: balance {}, outstanding {}",
        account.balance(),
        account.outstanding_loan()
    );

    // a second loan is rejected while one is active
    if let Err(e) = account.request_loan(Money::from_major(100)) {
        println!("rejected: {}", e);
    }

    // pay it down in two steps, the second an exact payoff
    account.repay_loan(Money::from_major(400))?;
    account.repay_loan(account.outstanding_loan())?;
    println!(
        "after payoff: balance {}, outstanding {}",
        account.balance(),
        account.outstanding_loan()
    );

    // overpaying is rejected, state is untouched
    if let Err(e) = account.repay_loan(Money::from_major(1)) {
        println!("rejected: {}", e);
    }

    for event in account.take_events() {
        println!("event: {:?}", event);
    }

    Ok(())
}
