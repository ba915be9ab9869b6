// Template constants for local content synthesis.
// Placeholders: `{topic}` and `{keywords}`, replaced before use.

use crate::models::content::{ContentType, Language};

pub const BLOG_EN: &str = r#"# {topic}: What You Need to Know

{topic} comes up in almost every conversation about {keywords}. This post walks through the basics, the common mistakes, and a few practical steps you can take today.

## Why {topic} Matters

Getting {topic} right saves time and money. Teams that pay attention to {keywords} tend to see steadier results, because small improvements add up over weeks and months.

## Getting Started

- Learn the core ideas behind {topic}.
- Decide which parts of {keywords} matter most to you.
- Set one clear goal and measure it.
- Review your progress every week.

## Common Mistakes

Many people try to do everything at once. Start small. Pick one area, improve it, and move on to the next. Avoid copying what others do without checking whether it fits your situation.

## Final Thoughts

{topic} is not complicated once you break it into steps. Keep {keywords} in mind, stay consistent, and the results will follow.
"#;

pub const ARTICLE_EN: &str = r#"# {topic}

{topic} has become an important subject for anyone interested in {keywords}. This article looks at where it stands today and what to expect next.

## Background

Interest in {topic} has grown steadily. Early efforts were simple, but as more people explored {keywords}, better methods and tools appeared.

## Key Points

1. {topic} works best with a clear plan.
2. Reliable data makes decisions about {keywords} easier.
3. Results improve when the work is reviewed often.

## Looking Ahead

The next few years will bring new ideas to {topic}. Readers who follow {keywords} closely will be in a good position to take advantage of them.

## Conclusion

{topic} rewards patience and careful work. Understanding {keywords} is a good place to begin.
"#;

pub const GUIDE_EN: &str = r#"# The Complete Guide to {topic}

This guide explains {topic} step by step, with a focus on {keywords}. Follow the steps in order, or jump to the part you need.

## Step 1: Understand the Basics

Before you start, learn what {topic} means and why {keywords} matters. A clear picture of the goal makes every later step easier.

## Step 2: Prepare

- Gather the tools you need.
- Write down what success looks like.
- Set aside regular time to work on {topic}.

## Step 3: Put It Into Practice

Apply what you learned to a small project first. Check the results against your goals for {keywords} and fix problems early.

## Step 4: Review and Improve

Look back at what worked. Keep the good habits, drop the rest, and repeat the cycle.

## Summary

{topic} becomes easier with practice. Keep {keywords} at the center of your plan and improve a little every week.
"#;

pub const REVIEW_EN: &str = r#"# {topic} Review

We took a close look at {topic}, paying special attention to {keywords}. Here is what we found.

## Overview

{topic} aims to make life easier for people who care about {keywords}. It is easy to get started with and covers the essentials well.

## Pros

- Simple to learn.
- Solid results for {keywords}.
- Good value for the price.

## Cons

- Some advanced features are missing.
- Documentation could be clearer.

## Verdict

{topic} is a solid choice for most readers. If {keywords} is your priority, it is well worth trying.
"#;

pub const BLOG_TH: &str = r#"# {topic}: สิ่งที่คุณควรรู้

{topic} เป็นหัวข้อที่ถูกพูดถึงบ่อย เมื่อพูดถึง {keywords} บทความนี้จะอธิบาย พื้นฐาน ข้อผิดพลาดที่พบบ่อย และขั้นตอน ที่คุณทำได้ทันที

## ทำไม {topic} จึงสำคัญ

การเข้าใจ {topic} อย่างถูกต้อง ช่วยประหยัด ทั้งเวลาและค่าใช้จ่าย ทีมที่ใส่ใจ {keywords} มักได้ผลลัพธ์ ที่สม่ำเสมอกว่า

## เริ่มต้นอย่างไร

- ศึกษาแนวคิดหลัก ของ {topic}
- เลือกส่วนของ {keywords} ที่สำคัญที่สุด สำหรับคุณ
- ตั้งเป้าหมาย ที่ชัดเจน และวัดผล
- ทบทวนความคืบหน้า ทุกสัปดาห์

## สรุป

{topic} ไม่ใช่เรื่องยาก เมื่อแบ่งเป็นขั้นตอน ให้ความสำคัญกับ {keywords} อย่างสม่ำเสมอ แล้วผลลัพธ์ จะตามมา
"#;

pub const ARTICLE_TH: &str = r#"# {topic}

{topic} กลายเป็นหัวข้อสำคัญ สำหรับผู้ที่สนใจ {keywords} บทความนี้จะพาไปดู สถานการณ์ปัจจุบัน และแนวโน้ม ในอนาคต

## ความเป็นมา

ความสนใจใน {topic} เพิ่มขึ้นอย่างต่อเนื่อง เมื่อมีผู้ศึกษา {keywords} มากขึ้น วิธีการและเครื่องมือ ก็พัฒนาตามไปด้วย

## ประเด็นสำคัญ

1. {topic} ได้ผลดีที่สุด เมื่อมีแผนที่ชัดเจน
2. ข้อมูลที่เชื่อถือได้ ช่วยให้ตัดสินใจเรื่อง {keywords} ได้ง่ายขึ้น
3. ผลลัพธ์จะดีขึ้น เมื่อมีการทบทวน อยู่เสมอ

## บทสรุป

{topic} ต้องอาศัย ความอดทน และความตั้งใจ การเข้าใจ {keywords} คือจุดเริ่มต้น ที่ดี
"#;

pub const GUIDE_TH: &str = r#"# คู่มือ {topic} ฉบับสมบูรณ์

คู่มือนี้อธิบาย {topic} ทีละขั้นตอน โดยเน้นที่ {keywords} คุณสามารถ ทำตามลำดับ หรือข้ามไปยัง ส่วนที่ต้องการ ได้เลย

## ขั้นตอนที่ 1: เข้าใจพื้นฐาน

ก่อนเริ่มต้น ควรเข้าใจว่า {topic} คืออะไร และทำไม {keywords} จึงสำคัญ

## ขั้นตอนที่ 2: เตรียมความพร้อม

- รวบรวม เครื่องมือที่จำเป็น
- กำหนด เป้าหมายให้ชัดเจน
- แบ่งเวลา สำหรับ {topic} อย่างสม่ำเสมอ

## ขั้นตอนที่ 3: ลงมือทำ

เริ่มจาก โปรเจกต์เล็ก ๆ ก่อน แล้วตรวจสอบผลลัพธ์ เทียบกับเป้าหมาย ด้าน {keywords}

## สรุป

{topic} จะง่ายขึ้น เมื่อฝึกฝน อย่างต่อเนื่อง ให้ {keywords} เป็นหัวใจ ของแผนงาน
"#;

pub const REVIEW_TH: &str = r#"# รีวิว {topic}

เราได้ทดลองใช้ {topic} โดยให้ความสำคัญ กับ {keywords} เป็นพิเศษ และนี่คือ สิ่งที่เราพบ

## ภาพรวม

{topic} ออกแบบมา เพื่อช่วยผู้ที่สนใจ {keywords} ใช้งานง่าย และครอบคลุม สิ่งที่จำเป็น

## ข้อดี

- เรียนรู้ได้ง่าย
- ให้ผลลัพธ์ที่ดี ด้าน {keywords}
- คุ้มค่า กับราคา

## ข้อเสีย

- ยังขาด ฟีเจอร์ขั้นสูง บางอย่าง
- เอกสารประกอบ ยังไม่ชัดเจนนัก

## สรุป

{topic} เป็นตัวเลือก ที่ดีสำหรับ ผู้อ่านส่วนใหญ่ หากคุณให้ความสำคัญกับ {keywords} ก็คุ้มค่า ที่จะลอง
"#;

pub const FILLER_HEADING_EN: &str = "## Additional Information";

pub const FILLER_BODY_EN: &str = "When working with {topic}, it helps to keep a simple checklist. \
Revisit your goals regularly, compare results against what you expected, and adjust your approach \
when something is not working. Focusing on {keywords} keeps the effort grounded in what readers \
actually search for, and steady improvements usually beat large one-off changes.";

pub const FILLER_HEADING_TH: &str = "## ข้อมูลเพิ่มเติม";

pub const FILLER_BODY_TH: &str = "เมื่อทำงานเกี่ยวกับ {topic} ควรมี รายการตรวจสอบ ที่เรียบง่าย \
ทบทวนเป้าหมาย อย่างสม่ำเสมอ เปรียบเทียบผลลัพธ์ กับสิ่งที่คาดไว้ และปรับวิธีการ เมื่อพบปัญหา \
การให้ความสำคัญกับ {keywords} ช่วยให้เนื้อหา ตรงกับสิ่งที่ผู้อ่าน ค้นหาจริง";

/// Body template for a `(content type, language)` pair.
pub fn template_for(content_type: ContentType, language: Language) -> &'static str {
    match (content_type, language) {
        (ContentType::Blog, Language::En) => BLOG_EN,
        (ContentType::Article, Language::En) => ARTICLE_EN,
        (ContentType::Guide, Language::En) => GUIDE_EN,
        (ContentType::Review, Language::En) => REVIEW_EN,
        (ContentType::Blog, Language::Th) => BLOG_TH,
        (ContentType::Article, Language::Th) => ARTICLE_TH,
        (ContentType::Guide, Language::Th) => GUIDE_TH,
        (ContentType::Review, Language::Th) => REVIEW_TH,
    }
}

/// `(heading, body)` of the padding section for a language.
pub fn filler_for(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::En => (FILLER_HEADING_EN, FILLER_BODY_EN),
        Language::Th => (FILLER_HEADING_TH, FILLER_BODY_TH),
    }
}
