use crate::model::ProblemId;

use super::header::{HEADER_END, HEADER_START};

/// Build the single user message sent to the completions API.
#[must_use]
pub fn editorial_prompt(problem_id: &ProblemId) -> String {
    format!(
        "I need you to generate a comprehensive editorial for LeetCode problem {problem_id}.

First, identify the basic information about this problem:
- Problem name/title
- Difficulty level (Easy/Medium/Hard)
- Main topics/tags
- Problem description

Then write a detailed editorial with:

1. **Problem Analysis** - Break down what the problem is asking
2. **Approach & Algorithm** - Detailed explanation of the solution strategy
3. **Step-by-step Solution** - Clear implementation steps
4. **Time & Space Complexity** - Big O analysis
5. **Java Code Implementation** - Clean, commented Java code with proper class structure
6. **Example Walkthrough** - Trace through with sample input
7. **Edge Cases** - Important considerations
8. **Alternative Approaches** - Other ways to solve this problem

Format the response clearly with headings and code blocks. Make it interview-preparation friendly. Use Java for all code examples.

Start your response with the problem information in this exact format:
{HEADER_START}
Title: [Problem Name]
Difficulty: [Easy/Medium/Hard]
Topics: [Topic1, Topic2, Topic3]
Description: [Brief description]
{HEADER_END}

Then continue with the detailed editorial."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_problem_and_header_format() {
        let prompt = editorial_prompt(&ProblemId::parse("146").unwrap());
        assert!(prompt.contains("LeetCode problem 146."));
        assert!(prompt.contains("PROBLEM_INFO:\nTitle: [Problem Name]"));
        assert!(prompt.contains("Description: [Brief description]\nEND_PROBLEM_INFO"));
    }
}
