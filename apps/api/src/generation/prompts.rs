// The generation prompt. The four-section output layout is a soft contract
// with the model: the section parser tolerates any number of headings.

use crate::models::form::GenerationForm;

/// Prompt template for the resume generation call.
/// Replace: {company_name}, {experience_level}, {job_description},
///          {current_resume}, {tone}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"You are a professional career coach and resume optimization expert.
Your task is to generate a personalized cover letter, improve the resume content,
and provide an ATS (Applicant Tracking System) analysis.

Inputs:
Company Name: {company_name}
Experience Level: {experience_level}  (Fresher / Experienced)
Job Description: {job_description}
Current Resume: {current_resume} (If empty, assume no resume exists and create a draft)
Preferred Tone: {tone}

Output (format clearly in sections):

1. Tailored Cover Letter
Write a professional cover letter addressed to {company_name}.
Use the specified tone: {tone}.
Highlight relevant skills and experiences based on the job description.

2. Updated Resume Content
Suggest optimized resume summary, bullet points, and skills tailored to {job_description}.
Ensure the content is concise, achievement-focused, and ATS-friendly.

3. Keyword Match Analysis
Extract the most important keywords from the job description.
Check if they exist in the provided resume (if given).
List missing keywords that should be added.

4. ATS Score Estimate (0–100)
Provide a rough ATS match score for the current resume against the job description.
Explain the reasoning briefly (e.g., missing keywords, formatting issues, irrelevant content).

Ensure the response is structured, clear, and easy to display in the client app."#;

/// Builds the generation prompt by interpolating all five form fields into
/// the fixed template.
pub fn build_generation_prompt(form: &GenerationForm) -> String {
    GENERATION_PROMPT_TEMPLATE
        .replace("{company_name}", &form.company_name)
        .replace("{experience_level}", form.applying_as.as_str())
        .replace("{job_description}", &form.job_description)
        .replace("{current_resume}", &form.current_resume)
        .replace("{tone}", form.cover_letter_tone.as_str())
}
