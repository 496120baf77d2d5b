//! `routewise analyze`

use routewise_llm::analyze_prompt;

pub fn run(prompt: &str, json: bool) -> anyhow::Result<()> {
    let analysis = analyze_prompt(prompt);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("Task type:            {}", analysis.task_type);
    println!("Domain:               {}", analysis.domain);
    println!("Complexity:           {}/10", analysis.complexity);
    println!("Expertise required:   {}/10", analysis.expertise_required);
    println!("Accuracy requirement: {}/10", analysis.accuracy_requirement);
    println!("Response length:      {:?}", analysis.expected_response_length);
    println!("Time sensitivity:     {:?}", analysis.time_sensitivity);
    Ok(())
}
