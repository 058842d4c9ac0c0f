use ee9_shared::calculators::{
    format_currency, BankrollInput, BankrollResult, CalculatorError, CalculatorState, RtpInput,
    RtpResult, TurnoverInput, TurnoverResult,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{components::scroll_to_top_button::ScrollToTopButton, hooks::use_scroll_to_top};

fn bind_input(value: &UseStateHandle<String>) -> Callback<InputEvent> {
    let value = value.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
            value.set(target.value());
        }
    })
}

fn number_field(label: &'static str, value: &UseStateHandle<String>, step: &'static str) -> Html {
    html! {
        <label class="block">
            <span class="block text-sm text-brand-neutral mb-2">{ label }</span>
            <input
                type="number"
                step={step}
                value={(**value).clone()}
                oninput={bind_input(value)}
                class="w-full px-4 py-3 bg-brand-black border border-brand-gold/30 rounded-lg text-white"
            />
        </label>
    }
}

fn range_field(value: &UseStateHandle<String>, min: &'static str, max: &'static str) -> Html {
    html! {
        <input
            type="range"
            min={min}
            max={max}
            value={(**value).clone()}
            oninput={bind_input(value)}
            class="w-full mt-2 accent-brand-gold"
        />
    }
}

fn error_line(error: Option<&CalculatorError>) -> Html {
    match error {
        Some(error) => html! {
            <p class="text-sm text-red-400 mt-3" role="alert">
                <i class="ri-error-warning-line mr-1"></i>
                { error.to_string() }
            </p>
        },
        None => html! {},
    }
}

fn tips(items: &[&'static str]) -> Html {
    html! {
        <ul class="mt-6 space-y-2 text-sm text-brand-neutral">
            { for items.iter().map(|item| html! {
                <li class="flex gap-2"><i class="ri-check-line text-brand-gold"></i>{ *item }</li>
            }) }
        </ul>
    }
}

fn calculator_card(icon: &'static str, title: &'static str, subtitle: &'static str, body: Html) -> Html {
    html! {
        <div class="rounded-2xl border border-brand-gold/20 bg-brand-black p-8">
            <div class="flex items-center gap-4 mb-6">
                <div class="w-14 h-14 bg-brand-gold rounded-xl flex items-center justify-center">
                    <i class={classes!(icon, "text-3xl", "text-brand-black")}></i>
                </div>
                <div>
                    <h2 class="font-bold text-2xl text-white">{ title }</h2>
                    <p class="text-sm text-brand-neutral">{ subtitle }</p>
                </div>
            </div>
            { body }
        </div>
    }
}

#[function_component(BankrollPlanner)]
fn bankroll_planner() -> Html {
    let total = use_state(|| "1000".to_string());
    let percentage = use_state(|| "10".to_string());
    let state = use_state(CalculatorState::<BankrollResult>::new);

    let calculate = {
        let total = total.clone();
        let percentage = percentage.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let outcome = BankrollInput::parse(&total, &percentage).and_then(|input| input.compute());
            let mut next = (*state).clone();
            next.submit(outcome);
            state.set(next);
        })
    };

    let body = html! {
        <>
            <div class="space-y-4">
                { number_field("Total Bankroll ($)", &total, "1") }
                <div>
                    { number_field("Session Budget (% of bankroll)", &percentage, "0.5") }
                    { range_field(&percentage, "1", "20") }
                </div>
                <button class="btn-gold w-full" onclick={calculate}>{ "Calculate Session Budget" }</button>
            </div>
            { error_line(state.error()) }
            if let Some(result) = state.result() {
                <div class="mt-6 rounded-xl bg-brand-gold/10 border border-brand-gold/30 p-6">
                    <p class="text-sm text-brand-neutral">{ "Recommended Session Budget:" }</p>
                    <p class="text-3xl font-bold text-brand-gold">{ format_currency(result.session_budget) }</p>
                    <p class="text-sm text-brand-neutral mt-2">
                        { format!("This allows you to play {} sessions with your total bankroll.", result.sessions_available) }
                    </p>
                </div>
            }
            { tips(&[
                "Never risk more than 10% per session",
                "Set win and loss limits before playing",
                "Keep your bankroll separate from daily expenses",
                "Track your sessions to monitor performance",
            ]) }
        </>
    };

    calculator_card("ri-wallet-3-line", "Bankroll Planner", "Calculate your optimal session budget", body)
}

#[function_component(TurnoverCalculator)]
fn turnover_calculator() -> Html {
    let bonus = use_state(|| "100".to_string());
    let multiplier = use_state(|| "30".to_string());
    let state = use_state(CalculatorState::<TurnoverResult>::new);

    let calculate = {
        let bonus = bonus.clone();
        let multiplier = multiplier.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let outcome = TurnoverInput::parse(&bonus, &multiplier).and_then(|input| input.compute());
            let mut next = (*state).clone();
            next.submit(outcome);
            state.set(next);
        })
    };

    let body = html! {
        <>
            <div class="space-y-4">
                { number_field("Bonus Amount ($)", &bonus, "1") }
                { number_field("Wagering Requirement (x times)", &multiplier, "1") }
                <button class="btn-gold w-full" onclick={calculate}>{ "Calculate Total Turnover" }</button>
            </div>
            { error_line(state.error()) }
            if let Some(result) = state.result() {
                <div class="mt-6 rounded-xl bg-brand-gold/10 border border-brand-gold/30 p-6">
                    <p class="text-sm text-brand-neutral">{ "Total Wagering Required:" }</p>
                    <p class="text-3xl font-bold text-brand-gold">{ format_currency(result.required_turnover) }</p>
                    <p class="text-sm text-brand-neutral mt-2">
                        { "You need to wager this amount before withdrawing bonus winnings." }
                    </p>
                </div>
            }
            { tips(&[
                "Read all terms and conditions carefully",
                "Check game contribution percentages",
                "Note time limits for clearing bonuses",
                "Consider if the bonus is worth the requirements",
            ]) }
        </>
    };

    calculator_card("ri-gift-line", "Bonus Turnover Calculator", "Calculate wagering requirements", body)
}

#[function_component(RtpCalculator)]
fn rtp_calculator() -> Html {
    let rtp = use_state(|| "96".to_string());
    let wagered = use_state(|| "1000".to_string());
    let spins = use_state(|| "100".to_string());
    let state = use_state(CalculatorState::<(RtpInput, RtpResult)>::new);

    let calculate = {
        let rtp = rtp.clone();
        let wagered = wagered.clone();
        let spins = spins.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let outcome = RtpInput::parse(&rtp, &wagered, &spins)
                .and_then(|input| input.compute().map(|result| (input, result)));
            let mut next = (*state).clone();
            next.submit(outcome);
            state.set(next);
        })
    };

    let body = html! {
        <>
            <div class="space-y-4">
                <div>
                    { number_field("RTP Percentage (%)", &rtp, "0.1") }
                    { range_field(&rtp, "85", "99") }
                </div>
                { number_field("Total Amount Wagered ($)", &wagered, "1") }
                { number_field("Number of Spins", &spins, "1") }
                <button class="btn-gold w-full" onclick={calculate}>{ "Calculate Expected Return" }</button>
            </div>
            { error_line(state.error()) }
            if let Some((input, result)) = state.result() {
                <div class="mt-6 rounded-xl bg-brand-gold/10 border border-brand-gold/30 p-6 space-y-3">
                    <div class="flex justify-between">
                        <span class="text-sm text-brand-neutral">{ "Expected Return:" }</span>
                        <span class="font-bold text-brand-gold">{ format_currency(result.expected_return) }</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="text-sm text-brand-neutral">{ "Expected Loss:" }</span>
                        <span class="font-bold text-red-400">{ format_currency(result.expected_loss) }</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="text-sm text-brand-neutral">{ "Return Per Spin:" }</span>
                        <span class="font-bold text-white">{ format_currency(result.return_per_spin) }</span>
                    </div>
                    <p class="text-sm text-brand-neutral pt-2 border-t border-brand-gold/20">
                        { format!(
                            "Over {} spins with {}% RTP, you can expect to get back {} on average.",
                            input.spins_played,
                            input.rtp_percent,
                            format_currency(result.expected_return)
                        ) }
                    </p>
                </div>
            }
            { tips(&[
                "RTP is calculated over millions of spins",
                "Short-term results can vary significantly",
                "Higher RTP means better long-term returns",
                "Always check the game's RTP before playing",
            ]) }
        </>
    };

    calculator_card("ri-percent-line", "RTP Calculator", "Calculate expected returns", body)
}

#[function_component(ToolsPage)]
pub fn tools_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="tools-page">
            <section class="pt-32 pb-12 md:pt-40 text-center">
                <div class="max-w-4xl mx-auto px-4 md:px-8">
                    <h1 class="font-bold text-4xl md:text-6xl italic text-white mb-6">
                        { "Gaming " }<span class="text-brand-gold">{ "Tools" }</span>
                    </h1>
                    <p class="text-lg text-brand-neutral">
                        { "Free calculators and tools to help you manage your bankroll, understand bonus requirements, calculate expected returns, and make informed gaming decisions." }
                    </p>
                </div>
            </section>

            <section class="py-12 bg-brand-dark">
                <div class="max-w-7xl mx-auto px-4 md:px-8 grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <BankrollPlanner />
                    <TurnoverCalculator />
                    <RtpCalculator />
                </div>
            </section>

            <section class="py-16 text-center">
                <h2 class="font-bold text-3xl text-white mb-4">{ "More Tools" }</h2>
                <p class="text-brand-neutral">
                    { "We're developing additional calculators and tools to help you make better gaming decisions." }
                </p>
            </section>
            <ScrollToTopButton />
        </main>
    }
}
