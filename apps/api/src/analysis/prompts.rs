// All LLM prompt templates for the analysis module. Templates are data:
// placeholders ({resume_text}, {job_description}, {questions_json}) are
// substituted with `str::replace` before sending. Each template spells out
// the exact JSON schema the model must emit — the schema is a contract with
// the model, nothing here validates the reply against it.

/// Interpolated for `{job_description}` when the caller sent none.
pub const NO_JOB_DESCRIPTION: &str = "Not provided.";

/// Analyzer variant of the fallback — asks the model to infer the role.
pub const NO_JOB_DESCRIPTION_INFER: &str = "Not provided. Infer role from resume.";

/// ATS analysis prompt. Parses the resume and estimates an ATS score.
pub const ATS_ANALYZER_PROMPT_TEMPLATE: &str = r#"You are an ATS analysis agent.
Goal: Parse the resume and estimate an ATS score.

Resume Text:
{resume_text}

Job Description:
{job_description}

Output must be a JSON object with the exact structure:
{
  "parsedResume": {
    "name": "<string>",
    "contact": { "email": "...", "phone": "...", "location": "...", "linkedin": "...", "portfolio": "..." },
    "summary": "...",
    "skills": [ { "name": "...", "category": "...", "proficiencyLevel": "..." } ],
    "experience": [ { "title": "...", "company": "...", "startDate": "...", "endDate": "...", "descriptionBullets": ["..."] } ],
    "projects": [ { "name": "...", "role": "...", "descriptionBullets": ["..."], "technologies": ["..."] } ],
    "education": [ { "degree": "...", "institution": "...", "startYear": "...", "endYear": "..." } ],
    "certifications": [ { "name": "...", "issuer": "...", "year": "..." } ],
    "extraSections": []
  },
  "atsScore": {
    "score": <0-100>,
    "scoreBreakdown": { "keywordMatch": <0-100>, "sectionStructure": <0-100>, "readability": <0-100>, "roleAlignment": <0-100> },
    "summary": "..."
  },
  "jobSuitability": {
    "match": "<High | Medium | Low>",
    "percentage": <0-100>,
    "reasoning": "..."
  },
  "careerSuggestions": {
    "recommendedRoles": ["<Role 1>", "<Role 2>", "<Role 3>"],
    "marketOutlook": "<Description of current demand and typical openings for these roles>",
    "topCompaniesToTarget": ["<Company 1>", "<Company 2>"]
  },
  "resumePersona": {
    "tone": "<e.g. Leader, Doer, Academic, Creative>",
    "impression": "<short description of the vibe>"
  },
  "salaryEstimation": {
    "range": "<e.g. $80k - $100k or ₹10L - ₹15L>",
    "currency": "<inferred from location>"
  },
  "keywordAnalysis": {
    "jobRoleInferred": "...",
    "matchedKeywords": ["..."],
    "missingImportantKeywords": ["..."],
    "niceToHaveKeywords": ["..."]
  },
  "strengths": ["..."],
  "weaknesses": ["..."]
}

Return ONLY valid JSON. Do not include any other text."#;

/// ATS optimization prompt. Suggests improvements to raise the ATS score.
pub const ATS_OPTIMIZER_PROMPT_TEMPLATE: &str = r#"You are an ATS optimization agent.
Goal: Suggest improvements to increase ATS score.

Resume Text:
{resume_text}

Job Description:
{job_description}

Output must be a JSON object with the exact structure:
{
  "overallStrategy": "...",
  "sectionLevelSuggestions": [
    { "section": "...", "issue": "...", "suggestion": "...", "exampleRewrite": "..." }
  ],
  "keywordSuggestions": {
    "addTheseKeywords": [ { "keyword": "...", "reason": "...", "whereToAdd": "..." } ],
    "removeOrReduceTheseKeywords": [ { "keyword": "...", "reason": "..." } ]
  },
  "skillGapLearningPath": [
    { "skill": "<missing skill>", "learningTopics": ["<topic1>", "<topic2>"] }
  ],
  "formattingAndStructureTips": ["..."],
  "estimatedImprovedAtsScore": { "score": <0-100>, "assumptions": "..." }
}

Return ONLY valid JSON."#;

/// Interview coaching prompt. Requests exactly 30 questions split
/// 10 Easy / 10 Medium / 10 Hard — requested, not verified.
pub const INTERVIEW_COACH_PROMPT_TEMPLATE: &str = r#"You are an interview coaching agent.
Goal: Generate 30 interview questions (10 Easy, 10 Medium, 10 Hard).

Resume Text:
{resume_text}

Job Description:
{job_description}

Output must be a JSON object with the exact structure:
{
  "targetRole": "...",
  "difficultyDistribution": { "easy": 10, "medium": 10, "hard": 10 },
  "questions": [
    { "id": "Q1", "difficulty": "Easy", "category": "...", "question": "...", "basedOn": { "resumeSection": "...", "keywords": ["..."] }, "followUpHint": "..." }
  ]
}

Return ONLY valid JSON."#;

/// Model-answer prompt. `{questions_json}` is the JSON array of
/// {id, question} pairs — already stripped of every other field.
pub const ANSWER_GENERATOR_PROMPT_TEMPLATE: &str = r#"You are an interview preparation expert.
Goal: Generate model answers for the provided interview questions, tailored to the candidate's resume.

Resume Text:
{resume_text}

Job Description:
{job_description}

Questions:
{questions_json}

Output must be a JSON object with the exact structure:
{
  "answers": [
    { "questionId": "<id from input>", "question": "...", "answer": "<STAR method answer or technical explanation>" }
  ]
}

Return ONLY valid JSON."#;
