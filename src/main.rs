use budget_chart::{render_chart, Category};
use rust_decimal_macros::dec;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), anyhow::Error> {
    // logs go to stderr, stdout only gets the reports
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("budget_chart=info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut food = Category::new("Food");
    let mut clothing = Category::new("Clothing");
    let mut auto = Category::new("Auto");

    food.deposit(dec!(1000), "initial deposit");
    food.withdraw(dec!(10.15), "groceries");
    food.withdraw(dec!(15.89), "restaurant and more food for dessert");
    food.try_transfer(dec!(50), &mut clothing)?;
    clothing.withdraw(dec!(25.55), "");
    if !clothing.withdraw(dec!(100), "new coat") {
        tracing::info!(category = %clothing.name, "not enough funds for a new coat");
    }
    auto.deposit(dec!(1000), "initial deposit");
    auto.withdraw(dec!(15), "");

    let categories = [food, clothing, auto];
    for category in &categories {
        println!("{category}\n");
    }
    println!("{}", render_chart(&categories)?);
    Ok(())
}
